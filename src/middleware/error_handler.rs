use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    error::JsonPayloadError,
    Error, HttpRequest, HttpResponse,
};
use futures_util::future::LocalBoxFuture;
use std::future::{ready, Ready};
use std::rc::Rc;

use crate::core::{ApiResponse, AppError};
use crate::middleware::request_id::current_request_id;

/// Middleware that logs failed requests and, outside production, attaches
/// the debug rendering of the error to the failure envelope.
#[derive(Debug, Clone, Copy, Default)]
pub struct ErrorHandler {
    expose_details: bool,
}

impl ErrorHandler {
    pub fn new(expose_details: bool) -> Self {
        Self { expose_details }
    }
}

impl<S> Transform<S, ServiceRequest> for ErrorHandler
where
    S: Service<ServiceRequest, Response = ServiceResponse, Error = Error> + 'static,
    S::Future: 'static,
{
    type Response = ServiceResponse;
    type Error = Error;
    type InitError = ();
    type Transform = ErrorHandlerMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(ErrorHandlerMiddleware {
            service: Rc::new(service),
            expose_details: self.expose_details,
        }))
    }
}

pub struct ErrorHandlerMiddleware<S> {
    service: Rc<S>,
    expose_details: bool,
}

impl<S> Service<ServiceRequest> for ErrorHandlerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse, Error = Error> + 'static,
    S::Future: 'static,
{
    type Response = ServiceResponse;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let expose_details = self.expose_details;

        Box::pin(async move {
            let method = req.method().clone();
            let path = req.path().to_string();
            let request_id = current_request_id(&req);

            let res = match service.call(req).await {
                Ok(res) => res,
                Err(err) => {
                    tracing::error!(request_id = ?request_id, method = %method, path = %path, "Request error: {:?}", err);
                    return Err(err);
                }
            };

            let status = res.status();
            if !status.is_client_error() && !status.is_server_error() {
                return Ok(res);
            }

            let detail = res.response().error().map(|err| format!("{:?}", err));
            if status.is_server_error() {
                tracing::error!(
                    request_id = ?request_id,
                    method = %method,
                    path = %path,
                    status = %status,
                    detail = ?detail,
                    "Request failed"
                );
            } else {
                tracing::warn!(
                    request_id = ?request_id,
                    method = %method,
                    path = %path,
                    status = %status,
                    detail = ?detail,
                    "Request rejected"
                );
            }

            if !expose_details {
                return Ok(res);
            }

            let body = match res.response().error().and_then(|e| e.as_error::<AppError>()) {
                Some(app_err) => {
                    ApiResponse::failure(app_err.message()).with_detail(format!("{:?}", app_err))
                }
                None => return Ok(res),
            };

            let (req, _) = res.into_parts();
            let response = HttpResponse::build(status).json(body);
            Ok(ServiceResponse::new(req, response))
        })
    }
}

/// Map JSON extractor failures onto the validation envelope
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> Error {
    AppError::validation(format!("Invalid JSON payload: {}", err)).into()
}

/// Fallback for unmatched routes
pub async fn route_not_found() -> Result<HttpResponse, AppError> {
    Err(AppError::not_found("Route not found"))
}
