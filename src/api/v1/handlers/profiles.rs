/*
 * Responsibility
 * - /profiles 系 CRUD の ResourceDef 実装
 */
use uuid::Uuid;

use crate::api::v1::dto::profiles::{CreateProfileRequest, ProfileResponse, UpdateProfileRequest};
use crate::api::v1::handlers::resource::ResourceDef;
use crate::repos::profile_repo::{NewProfile, ProfilePatch, ProfileRow};
use crate::repos::store::DocumentStore;
use crate::state::AppState;

pub struct Profiles;

impl ResourceDef for Profiles {
    const NAME: &'static str = "profile";

    type Doc = ProfileRow;
    type Create = CreateProfileRequest;
    type Update = UpdateProfileRequest;
    type Response = ProfileResponse;

    fn store(state: &AppState) -> &dyn DocumentStore<ProfileRow> {
        state.profiles.as_ref()
    }

    fn draft(req: CreateProfileRequest, owner: Uuid) -> Result<NewProfile, &'static str> {
        req.validate()?;

        Ok(NewProfile {
            name: req.name,
            bio: req.bio,
            avatar_url: req.avatar_url,
            user_id: owner,
        })
    }

    fn patch(req: UpdateProfileRequest) -> Result<ProfilePatch, &'static str> {
        req.validate()?;

        Ok(ProfilePatch {
            name: req.name,
            bio: req.bio,
            avatar_url: req.avatar_url,
        })
    }

    fn is_empty_patch(patch: &ProfilePatch) -> bool {
        patch.is_empty()
    }

    fn response(doc: ProfileRow) -> ProfileResponse {
        ProfileResponse {
            id: doc.id,
            name: doc.name,
            bio: doc.bio,
            avatar_url: doc.avatar_url,
            user_id: doc.user_id,
            created_at: doc.created_at,
        }
    }
}
