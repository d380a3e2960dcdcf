use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    web, Error, ResponseError,
};
use futures::future::LocalBoxFuture;
use std::future::{ready, Ready};

use crate::{services::Validator, utils::AppError};

pub const ACCESS_HEADER: &str = "User-Access";

/// Rejects requests whose `User-Access` header is not the trusted token.
pub struct AccessGuard {
    validator: web::Data<Validator>,
}

impl AccessGuard {
    pub fn new(validator: web::Data<Validator>) -> Self {
        Self { validator }
    }
}

impl<S, B> Transform<S, ServiceRequest> for AccessGuard
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = AccessGuardService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AccessGuardService {
            service,
            validator: self.validator.clone(),
        }))
    }
}

pub struct AccessGuardService<S> {
    service: S,
    validator: web::Data<Validator>,
}

impl<S, B> Service<ServiceRequest> for AccessGuardService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        // Non UTF-8 header values never match the token
        let header = req
            .headers()
            .get(ACCESS_HEADER)
            .and_then(|value| value.to_str().ok());

        if self.validator.check_access(header) {
            let fut = self.service.call(req);
            return Box::pin(async move {
                let res = fut.await?;
                Ok(res.map_into_left_body())
            });
        }

        log::warn!("🚫 Access denied for request: {}", req.path());

        let res = req
            .into_response(AppError::AccessDenied.error_response())
            .map_into_right_body();
        Box::pin(async move { Ok(res) })
    }
}
