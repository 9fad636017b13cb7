use actix_web::{web, HttpResponse, Responder};

use crate::models::outing::OutingRequest;
use crate::services::outing_service::OutingService;

/*
    /api/outings
*/
pub async fn generate(
    data: web::Data<OutingService>,
    request: web::Json<OutingRequest>,
) -> impl Responder {
    let service = data.into_inner();
    println!("Outing request: {:?}", request);

    match service.generate(&request).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(err) => {
            // Both error cases are upstream collaborator failures, not
            // faults in the request itself.
            eprintln!("Failed to generate outing: {}", err);
            HttpResponse::BadGateway().json(serde_json::json!({
                "status": "error",
                "message": err.to_string(),
            }))
        }
    }
}
