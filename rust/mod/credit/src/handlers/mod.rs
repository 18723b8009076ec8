//! Request handlers and Flux wiring.
//!
//! Handlers call the domain services and write view state; they never
//! render. Each view's load follows `loading → {ready, error}`, with errors
//! caught here and stored as display text.

pub mod app_handlers;
pub mod business_handlers;
pub mod helpers;
pub mod history_handlers;
pub mod report_handlers;
pub mod user_handlers;

use std::any::Any;
use std::future::Future;
use std::sync::Arc;

use credit_client::ApiClient;
use credit_flux::{Flux, StateStore};

use crate::request::*;
use crate::service::{BusinessService, CreditReportService, RoleService};

/// Default rows per page for paginated views.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Backend context shared by every handler.
pub struct CreditContext {
    pub roles: RoleService,
    pub reports: CreditReportService,
    pub businesses: BusinessService,
    pub page_size: u32,
}

impl CreditContext {
    /// All services over one shared client.
    pub fn new(client: ApiClient, page_size: u32) -> Self {
        Self {
            roles: RoleService::new(client.clone()),
            reports: CreditReportService::new(client.clone()),
            businesses: BusinessService::new(client),
            page_size: page_size.max(1),
        }
    }
}

/// Register `handler` for requests of type `R` at `path`, handing it the
/// shared context.
fn route<R, F, Fut>(flux: &Flux, ctx: &Arc<CreditContext>, path: &str, handler: F)
where
    R: Any + Clone + Send + Sync,
    F: Fn(R, Arc<StateStore>, Arc<CreditContext>) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    let ctx = Arc::clone(ctx);
    flux.on_request(path, move |req: R, store: Arc<StateStore>| {
        handler(req, store, Arc::clone(&ctx))
    });
}

/// Register all handlers with a Flux instance.
pub fn register_handlers(flux: &Flux, ctx: Arc<CreditContext>) {
    // app
    route(flux, &ctx, NavigateReq::PATH, |req: NavigateReq, store, ctx| async move {
        business_handlers::handle_navigate(&req, &store, &ctx).await;
    });
    route(flux, &ctx, DismissErrorReq::PATH, |req: DismissErrorReq, store, _| async move {
        app_handlers::handle_dismiss_error(&req, &store).await;
    });

    // users
    route(flux, &ctx, LoadUsersReq::PATH, |_: LoadUsersReq, store, ctx| async move {
        user_handlers::handle_load(&store, &ctx).await;
    });
    route(flux, &ctx, OpenRoleModalReq::PATH, |req: OpenRoleModalReq, store, _| async move {
        user_handlers::handle_open_modal(&req, &store).await;
    });
    route(flux, &ctx, EditRoleModalReq::PATH, |req: EditRoleModalReq, store, _| async move {
        user_handlers::handle_edit_modal(&req, &store).await;
    });
    route(flux, &ctx, CloseRoleModalReq::PATH, |_: CloseRoleModalReq, store, _| async move {
        user_handlers::handle_close_modal(&store).await;
    });
    route(flux, &ctx, SubmitRoleReq::PATH, |_: SubmitRoleReq, store, ctx| async move {
        user_handlers::handle_submit_role(&store, &ctx).await;
    });
    route(flux, &ctx, ToggleUserStatusReq::PATH, |req: ToggleUserStatusReq, store, ctx| async move {
        user_handlers::handle_toggle_status(&req, &store, &ctx).await;
    });

    // roles/history
    route(flux, &ctx, LoadRoleHistoryReq::PATH, |req: LoadRoleHistoryReq, store, ctx| async move {
        history_handlers::handle_load(&req, &store, &ctx).await;
    });

    // credit
    route(flux, &ctx, LoadReportReq::PATH, |req: LoadReportReq, store, ctx| async move {
        report_handlers::handle_load_report(&req, &store, &ctx).await;
    });
    route(flux, &ctx, LoadMyReportsReq::PATH, |req: LoadMyReportsReq, store, ctx| async move {
        report_handlers::handle_load_my_reports(&req, &store, &ctx).await;
    });
    route(flux, &ctx, TurnMyReportsPageReq::PATH, |req: TurnMyReportsPageReq, store, ctx| async move {
        report_handlers::handle_turn_my_reports(&req, &store, &ctx).await;
    });
    route(flux, &ctx, GenerateReportReq::PATH, |req: GenerateReportReq, store, ctx| async move {
        report_handlers::handle_generate(&req, &store, &ctx).await;
    });

    // business
    route(flux, &ctx, LoadBusinessReq::PATH, |req: LoadBusinessReq, store, ctx| async move {
        business_handlers::handle_load_business(&req, &store, &ctx).await;
    });
    route(flux, &ctx, SelectTabReq::PATH, |req: SelectTabReq, store, ctx| async move {
        business_handlers::handle_select_tab(&req, &store, &ctx).await;
    });
    route(flux, &ctx, SearchBusinessReq::PATH, |req: SearchBusinessReq, store, ctx| async move {
        business_handlers::handle_search(&req, &store, &ctx).await;
    });
    route(flux, &ctx, TurnSearchPageReq::PATH, |req: TurnSearchPageReq, store, ctx| async move {
        business_handlers::handle_turn_search(&req, &store, &ctx).await;
    });
}
