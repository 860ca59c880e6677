use crate::components::{AppShell, ToastProvider};
use crate::features::auth::state::AuthProvider;
use crate::routes::AppRoutes;
use leptos::prelude::*;
use leptos_router::components::Router;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <AuthProvider>
            <ToastProvider>
                <Router>
                    <AppShell>
                        <AppRoutes />
                    </AppShell>
                </Router>
            </ToastProvider>
        </AuthProvider>
    }
}
