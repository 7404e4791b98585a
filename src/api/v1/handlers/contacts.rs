/*
 * Responsibility
 * - /contacts 系 CRUD の ResourceDef 実装
 */
use uuid::Uuid;

use crate::api::v1::dto::contacts::{ContactResponse, CreateContactRequest, UpdateContactRequest};
use crate::api::v1::handlers::resource::ResourceDef;
use crate::repos::contact_repo::{ContactPatch, ContactRow, NewContact};
use crate::repos::store::DocumentStore;
use crate::state::AppState;

pub struct Contacts;

impl ResourceDef for Contacts {
    const NAME: &'static str = "contact";

    type Doc = ContactRow;
    type Create = CreateContactRequest;
    type Update = UpdateContactRequest;
    type Response = ContactResponse;

    fn store(state: &AppState) -> &dyn DocumentStore<ContactRow> {
        state.contacts.as_ref()
    }

    fn draft(req: CreateContactRequest, owner: Uuid) -> Result<NewContact, &'static str> {
        req.validate()?;

        Ok(NewContact {
            name: req.name,
            dob: req.dob,
            phone: req.phone,
            user_id: owner,
        })
    }

    fn patch(req: UpdateContactRequest) -> Result<ContactPatch, &'static str> {
        req.validate()?;

        Ok(ContactPatch {
            name: req.name,
            dob: req.dob,
            phone: req.phone,
        })
    }

    fn is_empty_patch(patch: &ContactPatch) -> bool {
        patch.is_empty()
    }

    fn response(doc: ContactRow) -> ContactResponse {
        ContactResponse {
            id: doc.id,
            name: doc.name,
            dob: doc.dob,
            phone: doc.phone,
            user_id: doc.user_id,
            created_at: doc.created_at,
        }
    }
}
