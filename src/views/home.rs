// ============================================================================
// HOME VIEW - Entrada pública + formulario de license
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlInputElement};

use crate::app::AppState;
use crate::dom::{append_child, on_input, on_submit, set_text_content, ElementBuilder};
use crate::router::Route;

pub fn render_home(state: &AppState) -> Result<Element, JsValue> {
    let screen = ElementBuilder::new("div")?.class("home-screen").build();

    if state.auth.is_logged_in() {
        let name = state
            .auth
            .member_info()
            .map(|profile| profile.member_name)
            .unwrap_or_default();
        let welcome = ElementBuilder::new("p")?
            .class("welcome")
            .text(&format!("欢迎回来，{}", name))
            .build();
        append_child(&screen, &welcome)?;
        return Ok(screen);
    }

    let title = ElementBuilder::new("h1")?.text("会员登录").build();
    append_child(&screen, &title)?;

    let form = ElementBuilder::new("form")?.class("login-form").build();

    let input = ElementBuilder::new("input")?
        .class("license-input")
        .attr("type", "text")?
        .attr("placeholder", "请输入 License")?
        .build();

    let submit = ElementBuilder::new("button")?
        .class("btn-login")
        .attr("type", "submit")?
        .text("登录")
        .build();

    let error_box = ElementBuilder::new("p")?.class("login-error").build();

    // Estado local del formulario (en closures)
    let license = Rc::new(RefCell::new(String::new()));

    {
        let license = license.clone();
        on_input(&input, move |e: web_sys::InputEvent| {
            if let Some(target) = e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
                *license.borrow_mut() = target.value();
            }
        })?;
    }

    {
        let license = license.clone();
        let auth = state.auth.clone();
        let router = state.router.clone();
        let error_box = error_box.clone();
        on_submit(&form, move |e: web_sys::Event| {
            e.prevent_default();
            set_text_content(&error_box, "");

            let license_val = license.borrow().clone();
            let auth = auth.clone();
            let router = router.clone();
            let error_box = error_box.clone();
            spawn_local(async move {
                match auth.login(&license_val).await {
                    Ok(()) => {
                        crate::notify_logged_in();
                        router.navigate(Route::CurrentOrders);
                    }
                    Err(e) => {
                        // El mensaje del error es el texto para el usuario
                        set_text_content(&error_box, &e.to_string());
                    }
                }
            });
        })?;
    }

    append_child(&form, &input)?;
    append_child(&form, &submit)?;
    append_child(&screen, &form)?;
    append_child(&screen, &error_box)?;

    Ok(screen)
}
