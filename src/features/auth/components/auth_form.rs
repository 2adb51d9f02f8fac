use leptos::ev;
use leptos::prelude::*;

use crate::api::RegisterRequest;
use crate::features::auth::services::{self as auth};
use crate::state::use_app_state;

#[derive(Clone, Copy, PartialEq, Eq)]
enum AuthMode {
    Login,
    Register,
}

/// Login / registration screen shown while no session exists. Holds only
/// ephemeral form state; credentials are handed to the auth services and
/// never kept around.
#[component]
pub fn AuthForm() -> impl IntoView {
    let state = use_app_state();

    let (mode, set_mode) = signal(AuthMode::Login);
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (department_id, set_department_id) = signal(String::new());

    let reset_form = move || {
        set_username.set(String::new());
        set_password.set(String::new());
        set_name.set(String::new());
        set_email.set(String::new());
        set_department_id.set(String::new());
    };

    let toggle_mode = move |_| {
        set_mode.update(|m| {
            *m = match m {
                AuthMode::Login => AuthMode::Register,
                AuthMode::Register => AuthMode::Login,
            }
        });
        error.set(None);
        reset_form();
    };

    let handle_submit = move |ev: ev::SubmitEvent| {
        // Prevent the default form submission behavior (page reload)
        ev.prevent_default();

        match mode.get_untracked() {
            AuthMode::Login => {
                auth::login(
                    state,
                    username.get_untracked(),
                    password.get_untracked(),
                    busy,
                    error,
                );
            }
            AuthMode::Register => {
                let department_id = match department_id.get_untracked().parse::<i64>() {
                    Ok(id) => id,
                    Err(_) => {
                        error.set(Some("Selecione um departamento".to_string()));
                        return;
                    }
                };
                auth::register(
                    state,
                    RegisterRequest {
                        username: username.get_untracked(),
                        password: password.get_untracked(),
                        name: name.get_untracked(),
                        email: email.get_untracked(),
                        department_id,
                    },
                    busy,
                    error,
                );
            }
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <div class="auth-card-header">
                    <h1>"Agiliza"</h1>
                    <p>
                        {move || match mode.get() {
                            AuthMode::Login => "Entre na sua conta",
                            AuthMode::Register => "Crie sua conta",
                        }}
                    </p>
                </div>

                {move || {
                    error.get().map(|msg| view! {
                        <div class="auth-error">
                            <span class="auth-error-icon">"⚠"</span>
                            <span>{msg}</span>
                        </div>
                    })
                }}

                <form on:submit=handle_submit>
                    {move || {
                        (mode.get() == AuthMode::Register).then(|| view! {
                            <div class="form-group">
                                <label>"Nome Completo"</label>
                                <input
                                    type="text"
                                    on:input=move |ev| set_name.set(event_target_value(&ev))
                                    prop:value=move || name.get()
                                    required
                                />
                            </div>
                            <div class="form-group">
                                <label>"Email"</label>
                                <input
                                    type="email"
                                    on:input=move |ev| set_email.set(event_target_value(&ev))
                                    prop:value=move || email.get()
                                    required
                                />
                            </div>
                            <div class="form-group">
                                <label>"Departamento"</label>
                                <select
                                    on:change=move |ev| set_department_id.set(event_target_value(&ev))
                                    prop:value=move || department_id.get()
                                    required
                                >
                                    <option value="">"Selecione um departamento"</option>
                                    {move || state.departments.get()
                                        .into_iter()
                                        .map(|dept| view! {
                                            <option value=dept.id.to_string()>{dept.name}</option>
                                        })
                                        .collect::<Vec<_>>()}
                                </select>
                            </div>
                        })
                    }}

                    <div class="form-group">
                        <label>"Usuário"</label>
                        <input
                            type="text"
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                            prop:value=move || username.get()
                            required
                        />
                    </div>
                    <div class="form-group">
                        <label>"Senha"</label>
                        <input
                            type="password"
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            prop:value=move || password.get()
                            required
                        />
                    </div>

                    <button type="submit" class="btn-primary auth-submit" disabled=move || busy.get()>
                        {move || {
                            if busy.get() {
                                "Carregando..."
                            } else {
                                match mode.get() {
                                    AuthMode::Login => "Entrar",
                                    AuthMode::Register => "Criar Conta",
                                }
                            }
                        }}
                    </button>
                </form>

                <button class="btn-link" on:click=toggle_mode>
                    {move || match mode.get() {
                        AuthMode::Login => "Não tem conta? Criar conta",
                        AuthMode::Register => "Já tem conta? Fazer login",
                    }}
                </button>

                {move || {
                    (mode.get() == AuthMode::Login).then(|| view! {
                        <div class="auth-demo-accounts">
                            <p class="auth-demo-title">"Contas de teste:"</p>
                            <p><strong>"Admin:"</strong>" admin / 123456"</p>
                            <p><strong>"Usuário TI:"</strong>" joao.silva / 123456"</p>
                            <p><strong>"Gerente Marketing:"</strong>" maria.santos / 123456"</p>
                        </div>
                    })
                }}
            </div>
        </div>
    }
}
