use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Deserialize, IntoParams, Debug)]
#[into_params(parameter_in = Path)]
pub struct PhotoIdParams {
    /// Id of the diary entry.
    pub id: String,
}
