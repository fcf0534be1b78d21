//! Request handlers for all API endpoints

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use tracing::{debug, error, info, warn};

use super::models::*;
use super::AppState;
use crate::error::LedgerError;
use crate::models::token::{transfer_assets, FIAT_CURRENCIES};
use crate::simulation::{self, SwapReceipt, TransferReceipt, TransferRequest};
use crate::swap::{SwapQuote, DEFAULT_SLIPPAGE_PERCENT, SLIPPAGE_OPTIONS};
use crate::wallet::WalletInfo;

type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(context: &str, e: LedgerError) -> ApiError {
    let status = match &e {
        e if e.is_validation() => StatusCode::BAD_REQUEST,
        LedgerError::WalletNotConnected => StatusCode::CONFLICT,
        LedgerError::OperationAbandoned(_) => StatusCode::SERVICE_UNAVAILABLE,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };

    if status.is_server_error() {
        error!("{}: {}", context, e);
    } else {
        warn!("{}: {}", context, e);
    }

    (
        status,
        Json(ErrorResponse {
            error: context.to_string(),
            details: Some(e.to_string()),
        }),
    )
}

// ============================================================================
// Health Check
// ============================================================================

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
    })
}

// ============================================================================
// Transactions
// ============================================================================

pub async fn get_transactions(
    State(state): State<AppState>,
    Query(query): Query<TransactionsQuery>,
) -> Result<Json<TransactionsResponse>, ApiError> {
    let page_size = query.page_size.unwrap_or(state.config.transactions_page_size);

    let mut log = state.transactions.write().await;
    log.apply_search(query.search.as_deref().unwrap_or(""));
    log.set_page(query.page.unwrap_or(1));

    let page = log
        .view(page_size)
        .map_err(|e| api_error("Invalid transaction query", e))?;
    debug!(
        "Transactions page {}/{} ({} matches)",
        page.page, page.total_pages, page.total_items
    );

    Ok(Json(TransactionsResponse::from_page(log.state().clone(), page)))
}

pub async fn next_transactions_page(
    State(state): State<AppState>,
    Query(query): Query<PageNavQuery>,
) -> Result<Json<TransactionsResponse>, ApiError> {
    step_transactions_page(state, query, true).await
}

pub async fn prev_transactions_page(
    State(state): State<AppState>,
    Query(query): Query<PageNavQuery>,
) -> Result<Json<TransactionsResponse>, ApiError> {
    step_transactions_page(state, query, false).await
}

// Moves the session page under the active search term
async fn step_transactions_page(
    state: AppState,
    query: PageNavQuery,
    forward: bool,
) -> Result<Json<TransactionsResponse>, ApiError> {
    let page_size = query.page_size.unwrap_or(state.config.transactions_page_size);

    let mut log = state.transactions.write().await;
    let stepped = if forward {
        log.next_page(page_size)
    } else {
        log.prev_page(page_size)
    };
    stepped.map_err(|e| api_error("Invalid transaction query", e))?;

    let page = log
        .view(page_size)
        .map_err(|e| api_error("Invalid transaction query", e))?;
    Ok(Json(TransactionsResponse::from_page(log.state().clone(), page)))
}

// ============================================================================
// Tokens & Swap
// ============================================================================

pub async fn list_tokens(State(state): State<AppState>) -> Json<TokensResponse> {
    Json(TokensResponse {
        tokens: state.quoter.catalog().tokens().to_vec(),
        slippage_options: SLIPPAGE_OPTIONS.to_vec(),
        default_slippage: DEFAULT_SLIPPAGE_PERCENT,
        transfer_assets: transfer_assets(),
        fiat_currencies: FIAT_CURRENCIES.iter().map(|c| c.to_string()).collect(),
    })
}

pub async fn get_swap_quote(
    State(state): State<AppState>,
    Query(query): Query<QuoteQuery>,
) -> Result<Json<SwapQuote>, ApiError> {
    let slippage = query.slippage.unwrap_or(DEFAULT_SLIPPAGE_PERCENT);
    let quote = state
        .quoter
        .build_quote(&query.from, &query.to, query.amount.unwrap_or(0.0), slippage)
        .map_err(|e| api_error("Invalid swap quote request", e))?;

    if query.flip {
        let flipped = state
            .quoter
            .flip(&quote)
            .map_err(|e| api_error("Invalid swap quote request", e))?;
        return Ok(Json(flipped));
    }

    Ok(Json(quote))
}

pub async fn execute_swap(
    State(state): State<AppState>,
    Json(request): Json<SwapRequest>,
) -> Result<Json<SwapReceipt>, ApiError> {
    let connected = state.wallet.lock().await.is_connected();
    let slippage = request.slippage.unwrap_or(DEFAULT_SLIPPAGE_PERCENT);

    let quote = state
        .quoter
        .build_quote(&request.from, &request.to, request.amount, slippage)
        .map_err(|e| api_error("Invalid swap request", e))?;

    let mut teardown = state.teardown.clone();
    let receipt = simulation::simulate_swap(&quote, connected, state.swap_delay(), &mut teardown)
        .await
        .map_err(|e| api_error("Swap failed", e))?;

    info!("{}", receipt.message);
    Ok(Json(receipt))
}

// ============================================================================
// Transfer
// ============================================================================

pub async fn execute_transfer(
    State(state): State<AppState>,
    Json(request): Json<TransferRequest>,
) -> Result<Json<TransferReceipt>, ApiError> {
    let mut teardown = state.teardown.clone();
    let receipt = simulation::simulate_transfer(request, state.transfer_delay(), &mut teardown)
        .await
        .map_err(|e| api_error("Transfer failed", e))?;

    info!("Transfer {} completed", receipt.id);
    Ok(Json(receipt))
}

// ============================================================================
// Mint & Burn
// ============================================================================

pub async fn calculate_mint(Json(request): Json<CalculateRequest>) -> Result<Json<CalculateResponse>, ApiError> {
    let coin_value = simulation::calculate_coin_value(&request.amount, &request.currency)
        .map_err(|e| api_error("Invalid mint request", e))?;
    Ok(Json(CalculateResponse { coin_value }))
}

pub async fn calculate_burn(Json(request): Json<CalculateRequest>) -> Result<Json<CalculateResponse>, ApiError> {
    let coin_value = simulation::calculate_coin_value(&request.amount, &request.currency)
        .map_err(|e| api_error("Invalid burn request", e))?;
    Ok(Json(CalculateResponse { coin_value }))
}

// ============================================================================
// Wallet
// ============================================================================

pub async fn get_wallet(State(state): State<AppState>) -> Json<WalletInfo> {
    Json(state.wallet.lock().await.info())
}

pub async fn connect_wallet(
    State(state): State<AppState>,
    Json(request): Json<ConnectRequest>,
) -> Result<Json<WalletInfo>, ApiError> {
    let mut wallet = state.wallet.lock().await;
    wallet
        .connect(&request.address)
        .map_err(|e| api_error("Failed to connect wallet", e))?;
    Ok(Json(wallet.info()))
}

pub async fn logout(State(state): State<AppState>) -> Result<Json<WalletInfo>, ApiError> {
    let mut wallet = state.wallet.lock().await;
    wallet.logout().map_err(|e| api_error("Failed to log out", e))?;
    Ok(Json(wallet.info()))
}
