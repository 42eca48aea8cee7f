use presence_types::ClientError;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("no application id configured")]
    MissingApplicationId,

    #[error("failed to log in to the presence service: {0}")]
    Login(#[source] ClientError),
}
