//! Studio operations for the Manager.

use super::Manager;
use crate::{
    error::{Result, StudioError},
    models::{Collection, CollectionId, CollectionKind, Studio, StudioOverview},
    params::{CreateStudio, RenameStudio, Slug},
};

impl Manager {
    /// Creates a new studio.
    pub async fn create_studio(&self, params: &CreateStudio) -> Result<Studio> {
        let slug = params.slug.clone();
        let name = params.name.clone();

        self.with_database(move |db| db.create_studio(&slug, &name))
            .await
    }

    /// Lists all studios, oldest first.
    pub async fn list_studios(&self) -> Result<Vec<Studio>> {
        self.with_database(|db| db.list_studios()).await
    }

    /// Retrieves a studio by slug.
    pub async fn get_studio(&self, params: &Slug) -> Result<Option<Studio>> {
        let slug = params.slug.clone();

        self.with_database(move |db| db.get_studio(&slug)).await
    }

    /// Retrieves a studio together with all of its collections.
    pub async fn show_studio(&self, params: &Slug) -> Result<Option<StudioOverview>> {
        let slug = params.slug.clone();

        self.with_database(move |db| {
            let Some(studio) = db.get_studio(&slug)? else {
                return Ok(None);
            };

            let collections = CollectionKind::ALL
                .into_iter()
                .map(|kind| {
                    let id = CollectionId::new(slug.clone(), kind);
                    db.get_items(&id).map(|items| Collection { id, items })
                })
                .collect::<Result<Vec<_>>>()?;

            Ok(Some(StudioOverview {
                studio,
                collections,
            }))
        })
        .await
    }

    /// Changes a studio's display name.
    pub async fn rename_studio(&self, params: &RenameStudio) -> Result<Studio> {
        let slug = params.slug.clone();
        let name = params.name.clone();

        self.with_database(move |db| db.rename_studio(&slug, &name))
            .await
    }

    /// Deletes a studio and every item it owns.
    ///
    /// Returns the deleted studio for confirmation output.
    pub async fn delete_studio(&self, params: &Slug) -> Result<Studio> {
        let slug = params.slug.clone();

        self.with_database(move |db| {
            let studio = db
                .get_studio(&slug)?
                .ok_or_else(|| StudioError::StudioNotFound { slug: slug.clone() })?;
            db.delete_studio(&slug)?;
            Ok(studio)
        })
        .await
    }
}
