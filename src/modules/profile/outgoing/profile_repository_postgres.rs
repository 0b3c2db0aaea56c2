use async_trait::async_trait;
use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::profile::domain::entities::Profile;
use crate::modules::profile::ports::outgoing::{
    ProfileChanges, ProfileData, ProfileRepository, ProfileRepositoryError,
};

use super::entity::{ActiveModel as ProfileActiveModel, Column, Entity, Model as ProfileModel};

#[derive(Clone, Debug)]
pub struct ProfileRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProfileRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_to_profile(model: ProfileModel) -> Profile {
        Profile {
            id: model.id,
            user_id: model.user_id,
            education: model.education,
            location: model.location,
            phone: model.phone,
            skills: model.skills,
            interests: model.interests,
            resumes: model.resumes,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }

    async fn find_model(&self, user_id: Uuid) -> Result<Option<ProfileModel>, ProfileRepositoryError> {
        Entity::find()
            .filter(Column::UserId.eq(user_id))
            .one(&*self.db)
            .await
            .map_err(|e| ProfileRepositoryError::DatabaseError(e.to_string()))
    }
}

#[async_trait]
impl ProfileRepository for ProfileRepositoryPostgres {
    async fn upsert(&self, data: ProfileData) -> Result<Profile, ProfileRepositoryError> {
        let saved = match self.find_model(data.user_id).await? {
            Some(existing) => {
                let mut resumes = existing.resumes.clone();
                resumes.extend(data.resumes);

                let mut active: ProfileActiveModel = existing.into();
                active.education = Set(data.education);
                active.location = Set(data.location);
                active.phone = Set(data.phone);
                active.skills = Set(data.skills);
                active.interests = Set(data.interests);
                active.resumes = Set(resumes);
                active
                    .update(&*self.db)
                    .await
                    .map_err(|e| ProfileRepositoryError::DatabaseError(e.to_string()))?
            }
            None => {
                let active = ProfileActiveModel {
                    id: Set(Uuid::new_v4()),
                    user_id: Set(data.user_id),
                    education: Set(data.education),
                    location: Set(data.location),
                    phone: Set(data.phone),
                    skills: Set(data.skills),
                    interests: Set(data.interests),
                    resumes: Set(data.resumes),
                    created_at: NotSet,
                    updated_at: NotSet,
                };
                active
                    .insert(&*self.db)
                    .await
                    .map_err(|e| ProfileRepositoryError::DatabaseError(e.to_string()))?
            }
        };

        Ok(Self::map_to_profile(saved))
    }

    async fn find_by_owner(
        &self,
        user_id: Uuid,
    ) -> Result<Option<Profile>, ProfileRepositoryError> {
        Ok(self.find_model(user_id).await?.map(Self::map_to_profile))
    }

    async fn apply_changes(
        &self,
        user_id: Uuid,
        changes: ProfileChanges,
    ) -> Result<Profile, ProfileRepositoryError> {
        let existing = self
            .find_model(user_id)
            .await?
            .ok_or(ProfileRepositoryError::ProfileNotFound)?;

        let mut active: ProfileActiveModel = existing.into();
        if let Some(education) = changes.education {
            active.education = Set(education);
        }
        if let Some(location) = changes.location {
            active.location = Set(location);
        }
        if let Some(phone) = changes.phone {
            active.phone = Set(phone);
        }
        if let Some(skills) = changes.skills {
            active.skills = Set(skills);
        }
        if let Some(interests) = changes.interests {
            active.interests = Set(interests);
        }

        let updated = active
            .update(&*self.db)
            .await
            .map_err(|e| ProfileRepositoryError::DatabaseError(e.to_string()))?;

        Ok(Self::map_to_profile(updated))
    }

    async fn append_resume(
        &self,
        user_id: Uuid,
        path: String,
    ) -> Result<Profile, ProfileRepositoryError> {
        let existing = self
            .find_model(user_id)
            .await?
            .ok_or(ProfileRepositoryError::ProfileNotFound)?;

        let mut resumes = existing.resumes.clone();
        resumes.push(path);

        let mut active: ProfileActiveModel = existing.into();
        active.resumes = Set(resumes);

        let updated = active
            .update(&*self.db)
            .await
            .map_err(|e| ProfileRepositoryError::DatabaseError(e.to_string()))?;

        Ok(Self::map_to_profile(updated))
    }

    async fn remove_resume(
        &self,
        user_id: Uuid,
        path: &str,
    ) -> Result<Profile, ProfileRepositoryError> {
        let existing = self
            .find_model(user_id)
            .await?
            .ok_or(ProfileRepositoryError::ProfileNotFound)?;

        let mut resumes = existing.resumes.clone();
        resumes.retain(|p| p != path);

        let mut active: ProfileActiveModel = existing.into();
        active.resumes = Set(resumes);

        let updated = active
            .update(&*self.db)
            .await
            .map_err(|e| ProfileRepositoryError::DatabaseError(e.to_string()))?;

        Ok(Self::map_to_profile(updated))
    }
}
