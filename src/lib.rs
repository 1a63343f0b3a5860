pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use application::{
    CompletionService, GenerateReviewsUseCase, ResultRepository, ResultView, SubmitQueryUseCase,
    ViewModelStore,
};

pub use cli::{Commands, OutputFormat};

pub use connector::{
    Container, ContainerConfig, GroqClient, JsonFileResultRepository, MockCompletion, Router,
};

pub use domain::{
    CompletionRequest, DomainError, ErrorKind, PromptMode, Query, QueryForm, ReviewResult,
    ReviewType, ViewState,
};
