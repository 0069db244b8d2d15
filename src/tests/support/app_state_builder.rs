use std::sync::Arc;
use std::time::Duration;

use actix_web::web;

use crate::auth::application::orchestrator::user_registration::UserRegistrationOrchestrator;
use crate::auth::application::use_cases::{
    register_user::IRegisterUserUseCase, verify_user_email::IVerifyUserEmailUseCase,
};
use crate::link::application::ports::incoming::use_cases::{CreateLinkUseCase, GetLinksUseCase};
use crate::tests::support::stubs::*;
use crate::AppState;

pub struct TestAppStateBuilder {
    register_user: Option<Arc<UserRegistrationOrchestrator>>,
    verify_user_email: Option<Arc<dyn IVerifyUserEmailUseCase + Send + Sync>>,
    create_link: Option<Arc<dyn CreateLinkUseCase + Send + Sync>>,
    get_links: Option<Arc<dyn GetLinksUseCase + Send + Sync>>,
}

fn test_orchestrator(
    use_case: Arc<dyn IRegisterUserUseCase + Send + Sync>,
) -> Arc<UserRegistrationOrchestrator> {
    Arc::new(UserRegistrationOrchestrator::new(
        use_case,
        Arc::new(StubUserEmailNotifier),
        Duration::from_secs(1),
    ))
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            register_user: Some(test_orchestrator(Arc::new(StubRegisterUserUseCase))),
            verify_user_email: Some(Arc::new(StubVerifyUserEmailUseCase)),
            create_link: Some(Arc::new(StubCreateLinkUseCase)),
            get_links: Some(Arc::new(StubGetLinksUseCase)),
        }
    }
}

impl TestAppStateBuilder {
    /// Wraps the use case in an orchestrator whose emails go nowhere.
    pub fn with_register_user(
        mut self,
        uc: impl IRegisterUserUseCase + Send + Sync + 'static,
    ) -> Self {
        self.register_user = Some(test_orchestrator(Arc::new(uc)));
        self
    }

    pub fn with_register_user_orchestrator(
        mut self,
        orchestrator: Arc<UserRegistrationOrchestrator>,
    ) -> Self {
        self.register_user = Some(orchestrator);
        self
    }

    pub fn with_verify_user_email(
        mut self,
        uc: impl IVerifyUserEmailUseCase + Send + Sync + 'static,
    ) -> Self {
        self.verify_user_email = Some(Arc::new(uc));
        self
    }

    pub fn with_create_link(mut self, uc: impl CreateLinkUseCase + Send + Sync + 'static) -> Self {
        self.create_link = Some(Arc::new(uc));
        self
    }

    pub fn with_get_links(mut self, uc: impl GetLinksUseCase + Send + Sync + 'static) -> Self {
        self.get_links = Some(Arc::new(uc));
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            register_user_orchestrator: self.register_user.unwrap(),
            verify_user_email_use_case: self.verify_user_email.unwrap(),
            create_link_use_case: self.create_link.unwrap(),
            get_links_use_case: self.get_links.unwrap(),
        })
    }
}
