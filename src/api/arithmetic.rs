use actix_web::{web, HttpRequest, HttpResponse};

use crate::{
    middleware::AccessGuard,
    models::ArithmeticResponse,
    services::{Evaluator, Validator},
    utils::AppError,
};

pub const ARITHMETIC_PATH: &str = "/api/arithmetic";

/// Registers the arithmetic resource with its access guard and shared state.
pub fn configure(
    validator: web::Data<Validator>,
    evaluator: web::Data<Evaluator>,
) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.app_data(validator.clone())
            .app_data(evaluator)
            .service(
                web::resource(ARITHMETIC_PATH)
                    .wrap(AccessGuard::new(validator))
                    .route(web::route().to(evaluate_expression)),
            );
    }
}

// ANY /api/arithmetic?q=2+2-3
pub async fn evaluate_expression(
    req: HttpRequest,
    validator: web::Data<Validator>,
    evaluator: web::Data<Evaluator>,
) -> Result<HttpResponse, AppError> {
    let raw = query_param(req.query_string(), "q");

    let expr = validator.validate_query(raw.as_deref()).map_err(|e| {
        log::info!("❌ Rejected query {:?}: {}", raw, e);
        e
    })?;

    let result = evaluator.evaluate(expr)?;
    log::info!("✅ {} = {}", expr, result);

    Ok(HttpResponse::Ok().json(ArithmeticResponse { result }))
}

/// First value for `name`. Pairs with a `;` or a broken `%` escape are
/// skipped, so a malformed `q` counts as absent.
fn query_param(query_string: &str, name: &str) -> Option<String> {
    query_string
        .split('&')
        .filter(|pair| !pair.is_empty() && !pair.contains(';') && has_valid_escapes(pair))
        .filter_map(|pair| web::Query::<Vec<(String, String)>>::from_query(pair).ok())
        .flat_map(|pairs| pairs.into_inner())
        .find(|(key, _)| key == name)
        .map(|(_, value)| value)
}

fn has_valid_escapes(pair: &str) -> bool {
    let mut rest = pair.as_bytes();
    while let Some(pos) = rest.iter().position(|&b| b == b'%') {
        match rest.get(pos + 1..pos + 3) {
            Some(hex) if hex.iter().all(u8::is_ascii_hexdigit) => rest = &rest[pos + 3..],
            _ => return false,
        }
    }
    true
}
