/*
 * Responsibility
 * - /decks 系 CRUD の ResourceDef 実装 (handler 本体は resource.rs)
 */
use uuid::Uuid;

use crate::api::v1::dto::decks::{CreateDeckRequest, DeckResponse, UpdateDeckRequest};
use crate::api::v1::handlers::resource::ResourceDef;
use crate::repos::deck_repo::{DeckPatch, DeckRow, NewDeck};
use crate::repos::store::DocumentStore;
use crate::state::AppState;

pub struct Decks;

impl ResourceDef for Decks {
    const NAME: &'static str = "deck";

    type Doc = DeckRow;
    type Create = CreateDeckRequest;
    type Update = UpdateDeckRequest;
    type Response = DeckResponse;

    fn store(state: &AppState) -> &dyn DocumentStore<DeckRow> {
        state.decks.as_ref()
    }

    fn draft(req: CreateDeckRequest, owner: Uuid) -> Result<NewDeck, &'static str> {
        req.validate()?;

        Ok(NewDeck {
            name: req.name,
            user_id: owner,
        })
    }

    fn patch(req: UpdateDeckRequest) -> Result<DeckPatch, &'static str> {
        req.validate()?;

        Ok(DeckPatch { name: req.name })
    }

    fn is_empty_patch(patch: &DeckPatch) -> bool {
        patch.is_empty()
    }

    fn response(doc: DeckRow) -> DeckResponse {
        DeckResponse {
            id: doc.id,
            name: doc.name,
            user_id: doc.user_id,
            updated_at: doc.updated_at,
        }
    }
}
