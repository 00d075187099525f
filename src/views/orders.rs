// ============================================================================
// ORDERS VIEWS - Pedidos actuales e historial
// ============================================================================
// El contenido de pedidos vive en el backend; estas vistas son el destino
// navegable protegido por el guard.

use wasm_bindgen::JsValue;
use web_sys::Element;

use crate::app::AppState;
use crate::dom::{append_child, ElementBuilder};

pub fn render_current_orders(_state: &AppState) -> Result<Element, JsValue> {
    render_orders_page("当前订单", "暂无进行中的订单")
}

pub fn render_order_history(_state: &AppState) -> Result<Element, JsValue> {
    render_orders_page("历史订单", "暂无历史订单")
}

fn render_orders_page(title: &str, empty_text: &str) -> Result<Element, JsValue> {
    let page = ElementBuilder::new("div")?.class("orders-page").build();
    let heading = ElementBuilder::new("h2")?.text(title).build();
    let empty = ElementBuilder::new("p")?
        .class("orders-empty")
        .text(empty_text)
        .build();
    append_child(&page, &heading)?;
    append_child(&page, &empty)?;
    Ok(page)
}
