use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::use_cases::login_user::{
    ILoginUserUseCase, LoginError, LoginRequest, LoginResponse,
};
use crate::auth::use_cases::logout_user::{ILogoutUseCase, LogoutError, LogoutResponse};
use crate::auth::use_cases::register_user::{
    IRegisterUserUseCase, RegisterError, RegisterRequest, RegisterResponse,
};
use crate::profile::domain::entities::Profile;
use crate::profile::use_cases::create_profile::{
    CreateProfileError, CreateProfileRequest, ICreateProfileUseCase,
};
use crate::profile::use_cases::delete_resume::{DeleteResumeError, IDeleteResumeUseCase};
use crate::profile::use_cases::fetch_profile::{FetchProfileError, IFetchProfileUseCase};
use crate::profile::use_cases::update_profile::{
    IUpdateProfileUseCase, UpdateProfileError, UpdateProfileRequest,
};
use crate::profile::use_cases::upload_resume::{IUploadResumeUseCase, UploadResumeError};
use crate::profile::use_cases::ResumeUpload;
use crate::recommendation::domain::entities::{Candidate, ScoredJob};
use crate::recommendation::use_cases::recommend_jobs::IRecommendJobsUseCase;

#[derive(Default, Clone)]
pub struct StubRegisterUserUseCase;

#[async_trait]
impl IRegisterUserUseCase for StubRegisterUserUseCase {
    async fn execute(&self, _request: RegisterRequest) -> Result<RegisterResponse, RegisterError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubLoginUserUseCase;

#[async_trait]
impl ILoginUserUseCase for StubLoginUserUseCase {
    async fn execute(&self, _request: LoginRequest) -> Result<LoginResponse, LoginError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubLogoutUseCase;

#[async_trait]
impl ILogoutUseCase for StubLogoutUseCase {
    async fn execute(&self, _token: &str) -> Result<LogoutResponse, LogoutError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubCreateProfileUseCase;

#[async_trait]
impl ICreateProfileUseCase for StubCreateProfileUseCase {
    async fn execute(&self, _request: CreateProfileRequest) -> Result<Profile, CreateProfileError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubFetchProfileUseCase;

#[async_trait]
impl IFetchProfileUseCase for StubFetchProfileUseCase {
    async fn execute(&self, _user_id: Uuid) -> Result<Profile, FetchProfileError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateProfileUseCase;

#[async_trait]
impl IUpdateProfileUseCase for StubUpdateProfileUseCase {
    async fn execute(
        &self,
        _user_id: Uuid,
        _request: UpdateProfileRequest,
    ) -> Result<Profile, UpdateProfileError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubUploadResumeUseCase;

#[async_trait]
impl IUploadResumeUseCase for StubUploadResumeUseCase {
    async fn execute(
        &self,
        _user_id: Uuid,
        _upload: ResumeUpload,
    ) -> Result<Profile, UploadResumeError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteResumeUseCase;

#[async_trait]
impl IDeleteResumeUseCase for StubDeleteResumeUseCase {
    async fn execute(&self, _user_id: Uuid, _filename: &str) -> Result<Profile, DeleteResumeError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubRecommendJobsUseCase;

#[async_trait]
impl IRecommendJobsUseCase for StubRecommendJobsUseCase {
    async fn execute(&self, _candidate: Candidate) -> Vec<ScoredJob> {
        unimplemented!("Not used in this test")
    }
}
