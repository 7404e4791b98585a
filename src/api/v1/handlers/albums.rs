/*
 * Responsibility
 * - /albums 系 CRUD の ResourceDef 実装
 */
use uuid::Uuid;

use crate::api::v1::dto::albums::{AlbumResponse, CreateAlbumRequest, UpdateAlbumRequest};
use crate::api::v1::handlers::resource::ResourceDef;
use crate::repos::album_repo::{AlbumPatch, AlbumRow, NewAlbum};
use crate::repos::store::DocumentStore;
use crate::state::AppState;

pub struct Albums;

impl ResourceDef for Albums {
    const NAME: &'static str = "album";

    type Doc = AlbumRow;
    type Create = CreateAlbumRequest;
    type Update = UpdateAlbumRequest;
    type Response = AlbumResponse;

    fn store(state: &AppState) -> &dyn DocumentStore<AlbumRow> {
        state.albums.as_ref()
    }

    fn draft(req: CreateAlbumRequest, owner: Uuid) -> Result<NewAlbum, &'static str> {
        req.validate()?;

        Ok(NewAlbum {
            name: req.name,
            desc: req.desc,
            user_id: owner,
        })
    }

    fn patch(req: UpdateAlbumRequest) -> Result<AlbumPatch, &'static str> {
        req.validate()?;

        Ok(AlbumPatch {
            name: req.name,
            desc: req.desc,
        })
    }

    fn is_empty_patch(patch: &AlbumPatch) -> bool {
        patch.is_empty()
    }

    fn response(doc: AlbumRow) -> AlbumResponse {
        AlbumResponse {
            id: doc.id,
            name: doc.name,
            desc: doc.desc,
            user_id: doc.user_id,
            created_at: doc.created_at,
        }
    }
}
