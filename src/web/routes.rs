//! API route definitions

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers;
use super::AppState;

/// Create all API routes
pub fn create_routes(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/api/health", get(handlers::health_check))

        // Transaction history
        .route("/api/transactions", get(handlers::get_transactions))
        .route("/api/transactions/next", post(handlers::next_transactions_page))
        .route("/api/transactions/prev", post(handlers::prev_transactions_page))

        // Tokens and swap
        .route("/api/tokens", get(handlers::list_tokens))
        .route("/api/swap/quote", get(handlers::get_swap_quote))
        .route("/api/swap", post(handlers::execute_swap))

        // Transfer
        .route("/api/transfer", post(handlers::execute_transfer))

        // Mint and burn calculators
        .route("/api/mint/calculate", post(handlers::calculate_mint))
        .route("/api/burn/calculate", post(handlers::calculate_burn))

        // Wallet / settings
        .route("/api/wallet", get(handlers::get_wallet))
        .route("/api/wallet/connect", post(handlers::connect_wallet))
        .route("/api/wallet/logout", post(handlers::logout))

        // Add state to all routes
        .with_state(state)
}
