// ============================================================================
// MY VIEW - Perfil del miembro + logout
// ============================================================================

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlInputElement};

use crate::app::AppState;
use crate::dom::{append_child, on_click, on_input, ElementBuilder};

pub fn render_my(state: &AppState) -> Result<Element, JsValue> {
    let page = ElementBuilder::new("div")?.class("my-page").build();

    // El guard no deja llegar acá sin sesión
    let profile = match state.auth.member_info() {
        Some(profile) => profile,
        None => return Ok(page),
    };

    let heading = ElementBuilder::new("h2")?.text("我的").build();
    append_child(&page, &heading)?;

    for (label, value) in [
        ("会员名", profile.member_name.as_str()),
        ("会员号", profile.member_key.as_str()),
        ("状态", profile.member_status.as_str()),
        ("邮箱", profile.email.as_str()),
        ("MAC 地址", profile.mac_address.as_str()),
        ("备注", profile.description.as_str()),
    ] {
        let row = ElementBuilder::new("div")?
            .class("profile-row")
            .text(&format!("{}：{}", label, value))
            .build();
        append_child(&page, &row)?;
    }

    // Teléfono editable: la mutación en memoria se vuelca a storage con
    // persist_member_info()
    let phone_label = ElementBuilder::new("label")?.text("电话").build();
    let phone_input = ElementBuilder::new("input")?
        .class("phone-input")
        .attr("type", "tel")?
        .attr("value", &profile.phone)?
        .build();
    {
        let auth = state.auth.clone();
        on_input(&phone_input, move |e: web_sys::InputEvent| {
            if let Some(target) = e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
                let phone = target.value();
                auth.update_member_info(move |profile| profile.phone = phone);
                auth.persist_member_info();
            }
        })?;
    }
    append_child(&page, &phone_label)?;
    append_child(&page, &phone_input)?;

    let logout_btn = ElementBuilder::new("button")?
        .class("btn-logout")
        .text("退出登录")
        .build();
    {
        let auth = state.auth.clone();
        on_click(&logout_btn, move |_| {
            auth.logout();
        })?;
    }
    append_child(&page, &logout_btn)?;

    Ok(page)
}
