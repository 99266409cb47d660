use std::sync::Arc;
use axum::{extract::{Json, Path, State}, http::StatusCode};
use serde_json::{Value, json};

use crate::{cqrs::{AddToBagCommand, AdvanceSlideCommand, CommandHandler, GetBagQuery, GetProductQuery, GetStorefrontQuery, JumpToSlideCommand, QueryHandler, RetreatSlideCommand}, dtos::ApiError, errors::StorefrontError, state::AppState};

fn error_response(e: StorefrontError) -> (StatusCode, Json<Value>) {
    let status = match &e {
        StorefrontError::ProductNotFound(_) => StatusCode::NOT_FOUND,
        StorefrontError::SlideOutOfRange { .. } => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (status, Json(json!(ApiError { error: e.to_string() })))
}

pub async fn get_storefront(State(state): State<Arc<AppState>>) -> (StatusCode, Json<Value>) {
    match state.get_storefront_query_handler.handle(&GetStorefrontQuery {}).await {
        Ok(response) => (StatusCode::OK, Json(json!(response))),
        Err(e) => error_response(e)
    }
}

pub async fn next_slide(State(state): State<Arc<AppState>>) -> (StatusCode, Json<Value>) {
    match state.advance_slide_command_handler.handle(&AdvanceSlideCommand {}).await {
        Ok(response) => (StatusCode::OK, Json(json!(response))),
        Err(e) => error_response(e)
    }
}

pub async fn prev_slide(State(state): State<Arc<AppState>>) -> (StatusCode, Json<Value>) {
    match state.retreat_slide_command_handler.handle(&RetreatSlideCommand {}).await {
        Ok(response) => (StatusCode::OK, Json(json!(response))),
        Err(e) => error_response(e)
    }
}

pub async fn jump_to_slide(Path(index): Path<usize>, State(state): State<Arc<AppState>>) -> (StatusCode, Json<Value>) {
    let input = JumpToSlideCommand {
        index
    };

    match state.jump_to_slide_command_handler.handle(&input).await {
        Ok(response) => (StatusCode::OK, Json(json!(response))),
        Err(e) => error_response(e)
    }
}

pub async fn get_product(Path(id): Path<String>, State(state): State<Arc<AppState>>) -> (StatusCode, Json<Value>) {
    let input = GetProductQuery {
        id: id.to_string()
    };

    match state.get_product_query_handler.handle(&input).await {
        Ok(response) => (StatusCode::OK, Json(json!(response))),
        Err(e) => error_response(e)
    }
}

pub async fn add_to_bag(state: State<Arc<AppState>>, Json(add_to_bag_command): Json<AddToBagCommand>) -> (StatusCode, Json<Value>) {
    match state.add_to_bag_command_handler.handle(&add_to_bag_command).await {
        Ok(response) => (StatusCode::CREATED, Json(json!(response))),
        Err(e) => error_response(e)
    }
}

pub async fn get_bag(State(state): State<Arc<AppState>>) -> (StatusCode, Json<Value>) {
    match state.get_bag_query_handler.handle(&GetBagQuery {}).await {
        Ok(response) => (StatusCode::OK, Json(json!(response))),
        Err(e) => error_response(e)
    }
}
