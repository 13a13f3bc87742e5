// ============================================================================
// LOGIN VIEW - Acceso del proveedor con móvil + contraseña
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlInputElement};
use crate::dom::navigation::redirect;
use crate::dom::{append_child, get_element_by_id, on_input, on_submit, set_error_text, toggle_attribute, ElementBuilder};
use crate::models::LoginErrors;
use crate::state::{AppState, MountGuard};
use crate::viewmodels::login_viewmodel::accept_mobile_input;
use crate::viewmodels::{LoginOutcome, LoginViewModel};

const MOBILE_ERROR_ID: &str = "login-error-mobile";
const PASSWORD_ERROR_ID: &str = "login-error-password";
const LOGIN_BUTTON_ID: &str = "login-submit";

const FORGOT_PASSWORD_PATH: &str = "/forgotpassword";
const SIGN_UP_PATH: &str = "/vendorsignup";

/// Renderizar vista de login
pub fn render_login(state: &AppState, guard: MountGuard) -> Result<Element, JsValue> {
    log::info!("🎬 [LOGIN] render_login() llamado");

    // Estado local del formulario (en closures)
    let mobile = Rc::new(RefCell::new(String::new()));
    let password = Rc::new(RefCell::new(String::new()));
    let vm = Rc::new(LoginViewModel::new(state.api.clone(), state.session.clone()));

    let screen = ElementBuilder::new("div")?.class("login-screen").build();

    let title = ElementBuilder::new("p")?
        .class("login-title")
        .text("Login to your account")
        .build();
    append_child(&screen, &title)?;

    let form = ElementBuilder::new("form")?
        .class("login-form")
        .attr("novalidate", "")?
        .build();

    // Móvil: solo dígitos; una tecla inválida deja el valor anterior
    let mobile_input = ElementBuilder::new("input")?
        .class("login-input")
        .attr("type", "tel")?
        .attr("inputmode", "numeric")?
        .attr("placeholder", "Mobile Number")?
        .build();
    {
        let mobile = mobile.clone();
        on_input(&mobile_input, move |input: HtmlInputElement| {
            let value = input.value();
            if accept_mobile_input(&value) {
                *mobile.borrow_mut() = value;
            } else {
                input.set_value(&mobile.borrow());
            }
        })?;
    }
    append_child(&form, &input_group(mobile_input, MOBILE_ERROR_ID)?)?;

    let password_input = ElementBuilder::new("input")?
        .class("login-input")
        .attr("type", "password")?
        .attr("placeholder", "Password")?
        .build();
    {
        let password = password.clone();
        on_input(&password_input, move |input: HtmlInputElement| {
            *password.borrow_mut() = input.value();
        })?;
    }
    append_child(&form, &input_group(password_input, PASSWORD_ERROR_ID)?)?;

    let login_btn = ElementBuilder::new("button")?
        .class("btn-login")
        .id(LOGIN_BUTTON_ID)?
        .attr("type", "submit")?
        .text("Login")
        .build();
    append_child(&form, &login_btn)?;

    {
        let state = state.clone();
        on_submit(&form, move || {
            let mobile = mobile.borrow().clone();
            let password = password.borrow().clone();
            let vm = vm.clone();
            let state = state.clone();
            let guard = guard.clone();
            set_loading(true);
            spawn_local(async move {
                let outcome = vm.login(&mobile, &password).await;
                if !guard.is_mounted() {
                    return;
                }
                set_loading(false);
                match outcome {
                    LoginOutcome::Invalid(errors) => show_errors(&errors),
                    LoginOutcome::LoggedIn { redirect: route } => {
                        show_errors(&LoginErrors::default());
                        redirect(&state, route);
                    }
                    // Los fallos del servidor solo se registran en consola
                    LoginOutcome::Failed(_) => show_errors(&LoginErrors::default()),
                }
            });
        })?;
    }

    let forgot = ElementBuilder::new("a")?
        .class("login-link")
        .attr("href", FORGOT_PASSWORD_PATH)?
        .text("Forget Password?")
        .build();
    append_child(&form, &forgot)?;

    let sign_up = ElementBuilder::new("p")?
        .class("login-link")
        .text("Don't have an account? ")
        .child(
            ElementBuilder::new("a")?
                .class("login-link-accent")
                .attr("href", SIGN_UP_PATH)?
                .text("SignUp")
                .build(),
        )?
        .build();
    append_child(&form, &sign_up)?;

    append_child(&screen, &form)?;
    Ok(screen)
}

fn input_group(input: Element, error_id: &str) -> Result<Element, JsValue> {
    let error = ElementBuilder::new("p")?
        .class("field-error")
        .id(error_id)?
        .attr("hidden", "")?
        .build();
    Ok(ElementBuilder::new("div")?
        .class("login-group")
        .child(input)?
        .child(error)?
        .build())
}

fn show_errors(errors: &LoginErrors) {
    let pairs = [
        (MOBILE_ERROR_ID, errors.mobile.as_deref()),
        (PASSWORD_ERROR_ID, errors.password.as_deref()),
    ];
    for (id, message) in pairs {
        if let Some(el) = get_element_by_id(id) {
            if let Err(e) = set_error_text(&el, message.unwrap_or("")) {
                log::warn!("⚠️ [LOGIN] No se pudo mostrar el error de {}: {:?}", id, e);
            }
        }
    }
}

fn set_loading(loading: bool) {
    if let Some(btn) = get_element_by_id(LOGIN_BUTTON_ID) {
        if let Err(e) = toggle_attribute(&btn, "disabled", loading) {
            log::warn!("⚠️ [LOGIN] No se pudo cambiar el estado del botón: {:?}", e);
        }
    }
}
