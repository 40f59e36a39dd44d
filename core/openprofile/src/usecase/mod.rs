pub(crate) mod list_profiles;
pub(crate) mod workflow;

pub(crate) use list_profiles::ListProfilesUseCase;
pub(crate) use workflow::WorkflowUseCase;
