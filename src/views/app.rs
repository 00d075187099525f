// ============================================================================
// APP VIEW - Shell + dispatch por ruta
// ============================================================================

use wasm_bindgen::JsValue;
use web_sys::Element;

use crate::app::AppState;
use crate::dom::{append_child, on_click, ElementBuilder};
use crate::router::Route;

/// Renderizar la aplicación completa para la ruta actual
pub fn render_app(state: &AppState) -> Result<Element, JsValue> {
    let shell = ElementBuilder::new("div")?.class("app-shell").build();

    // La barra de navegación solo tiene sentido con sesión abierta
    if state.auth.is_logged_in() {
        append_child(&shell, &render_nav(state)?)?;
    }

    let view = match state.router.current() {
        Route::Home => crate::views::home::render_home(state)?,
        Route::CurrentOrders => crate::views::orders::render_current_orders(state)?,
        Route::OrderHistory => crate::views::orders::render_order_history(state)?,
        Route::My => crate::views::my::render_my(state)?,
    };
    append_child(&shell, &view)?;

    Ok(shell)
}

fn render_nav(state: &AppState) -> Result<Element, JsValue> {
    let nav = ElementBuilder::new("nav")?.class("app-nav").build();

    for (route, label) in [
        (Route::Home, "首页"),
        (Route::CurrentOrders, "当前订单"),
        (Route::OrderHistory, "历史订单"),
        (Route::My, "我的"),
    ] {
        let class = if route == state.router.current() {
            "nav-link active"
        } else {
            "nav-link"
        };
        // href real para accesibilidad; el click lo intercepta el router
        let link = ElementBuilder::new("a")?
            .class(class)
            .text(label)
            .attr("href", route.path())?
            .build();
        {
            let router = state.router.clone();
            on_click(&link, move |e: web_sys::MouseEvent| {
                e.prevent_default();
                router.navigate(route);
            })?;
        }
        append_child(&nav, &link)?;
    }

    Ok(nav)
}
