use std::sync::Arc;

use crate::auth::use_cases::login_user::ILoginUserUseCase;
use crate::auth::use_cases::logout_user::ILogoutUseCase;
use crate::auth::use_cases::register_user::IRegisterUserUseCase;
use crate::profile::use_cases::create_profile::ICreateProfileUseCase;
use crate::profile::use_cases::delete_resume::IDeleteResumeUseCase;
use crate::profile::use_cases::fetch_profile::IFetchProfileUseCase;
use crate::profile::use_cases::update_profile::IUpdateProfileUseCase;
use crate::profile::use_cases::upload_resume::IUploadResumeUseCase;
use crate::recommendation::use_cases::recommend_jobs::IRecommendJobsUseCase;
use crate::tests::support::stubs::*;
use crate::AppState;

pub struct TestAppStateBuilder {
    register_user: Option<Arc<dyn IRegisterUserUseCase>>,
    login_user: Option<Arc<dyn ILoginUserUseCase>>,
    logout_user: Option<Arc<dyn ILogoutUseCase>>,
    create_profile: Option<Arc<dyn ICreateProfileUseCase>>,
    fetch_profile: Option<Arc<dyn IFetchProfileUseCase>>,
    update_profile: Option<Arc<dyn IUpdateProfileUseCase>>,
    upload_resume: Option<Arc<dyn IUploadResumeUseCase>>,
    delete_resume: Option<Arc<dyn IDeleteResumeUseCase>>,
    recommend_jobs: Option<Arc<dyn IRecommendJobsUseCase>>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            register_user: Some(Arc::new(StubRegisterUserUseCase)),
            login_user: Some(Arc::new(StubLoginUserUseCase)),
            logout_user: Some(Arc::new(StubLogoutUseCase)),
            create_profile: Some(Arc::new(StubCreateProfileUseCase)),
            fetch_profile: Some(Arc::new(StubFetchProfileUseCase)),
            update_profile: Some(Arc::new(StubUpdateProfileUseCase)),
            upload_resume: Some(Arc::new(StubUploadResumeUseCase)),
            delete_resume: Some(Arc::new(StubDeleteResumeUseCase)),
            recommend_jobs: Some(Arc::new(StubRecommendJobsUseCase)),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_register_user(mut self, uc: impl IRegisterUserUseCase + 'static) -> Self {
        self.register_user = Some(Arc::new(uc));
        self
    }

    pub fn with_login_user(mut self, uc: impl ILoginUserUseCase + 'static) -> Self {
        self.login_user = Some(Arc::new(uc));
        self
    }

    pub fn with_logout_user(mut self, uc: impl ILogoutUseCase + 'static) -> Self {
        self.logout_user = Some(Arc::new(uc));
        self
    }

    pub fn with_create_profile(mut self, uc: impl ICreateProfileUseCase + 'static) -> Self {
        self.create_profile = Some(Arc::new(uc));
        self
    }

    pub fn with_fetch_profile(mut self, uc: impl IFetchProfileUseCase + 'static) -> Self {
        self.fetch_profile = Some(Arc::new(uc));
        self
    }

    pub fn with_update_profile(mut self, uc: impl IUpdateProfileUseCase + 'static) -> Self {
        self.update_profile = Some(Arc::new(uc));
        self
    }

    pub fn with_upload_resume(mut self, uc: impl IUploadResumeUseCase + 'static) -> Self {
        self.upload_resume = Some(Arc::new(uc));
        self
    }

    pub fn with_delete_resume(mut self, uc: impl IDeleteResumeUseCase + 'static) -> Self {
        self.delete_resume = Some(Arc::new(uc));
        self
    }

    pub fn with_recommend_jobs(mut self, uc: impl IRecommendJobsUseCase + 'static) -> Self {
        self.recommend_jobs = Some(Arc::new(uc));
        self
    }

    pub fn build(self) -> AppState {
        AppState {
            register_user: self.register_user.expect("register_user not set"),
            login_user: self.login_user.expect("login_user not set"),
            logout_user: self.logout_user.expect("logout_user not set"),
            create_profile: self.create_profile.expect("create_profile not set"),
            fetch_profile: self.fetch_profile.expect("fetch_profile not set"),
            update_profile: self.update_profile.expect("update_profile not set"),
            upload_resume: self.upload_resume.expect("upload_resume not set"),
            delete_resume: self.delete_resume.expect("delete_resume not set"),
            recommend_jobs: self.recommend_jobs.expect("recommend_jobs not set"),
        }
    }
}
