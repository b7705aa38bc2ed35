use shared::User;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub user: Option<User>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    html! {
        <header class="header">
            <div class="container">
                <h1>{"Donor Management"}</h1>
                <div class="header-right">
                    <span class="session-display">
                        {if let Some(user) = &props.user {
                            format!(
                                "Signed in as {} {} ({})",
                                user.first_name,
                                user.last_name,
                                user.role.label()
                            )
                        } else {
                            "Not signed in".to_string()
                        }}
                    </span>
                </div>
            </div>
        </header>
    }
}
