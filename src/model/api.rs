use serde::{Deserialize, Serialize};

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// The response after a successful deletion
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct DataDto {
    pub data: bool,
}

/// Optional `expand` query parameter accepted by event endpoints
#[derive(Clone, Debug, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ExpandQuery {
    /// `user` embeds the owning user in each event
    pub expand: Option<String>,
}

impl ExpandQuery {
    /// Whether the owning user should be embedded in each event.
    pub fn expand_user(&self) -> bool {
        expands_user(self.expand.as_deref())
    }
}

/// Whether a comma separated `expand` value names `user`.
pub fn expands_user(expand: Option<&str>) -> bool {
    expand.is_some_and(|expand| expand.split(',').any(|field| field == "user"))
}
