// src/shared/api/payload_json.rs
use actix_web::{
    dev::Payload, error::InternalError, web, Error as ActixError, FromRequest, HttpRequest,
};
use futures::future::LocalBoxFuture;
use serde::de::DeserializeOwned;

use crate::shared::api::ApiResponse;

/// JSON body extractor for admin payloads.
///
/// Syntax errors go through `custom_json_config` like any `web::Json`. A
/// well-formed body whose field has the wrong type is answered with a
/// `VALIDATION_ERROR` that names the field.
#[derive(Debug)]
pub struct PayloadJson<T>(pub T);

impl<T> PayloadJson<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: DeserializeOwned + 'static> FromRequest for PayloadJson<T> {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let body = web::Json::<serde_json::Value>::from_request(req, payload);

        Box::pin(async move {
            let value = body.await?.into_inner();

            serde_path_to_error::deserialize(value)
                .map(PayloadJson)
                .map_err(|err| {
                    let path = err.path().to_string();
                    let field = (path != ".").then_some(path);
                    let message = err.inner().to_string();

                    let response = ApiResponse::invalid_field(field.as_deref(), &message);
                    InternalError::from_response(message, response).into()
                })
        })
    }
}
