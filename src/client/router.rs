use dioxus::prelude::*;

use crate::{
    client::{
        components::auth::{AuthLayout, GuestLayout},
        routes::{
            auth::{
                Admins, Crew, Dashboard, Documents, ShipDetails, Ships, Superintendents, Users,
            },
            ForgotPassword, Login, NotFound, ResetPassword,
        },
    },
    model::account::Role,
};

use crate::client::routes::NotFound as AuthNotFound;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(GuestLayout)]

        #[route("/")]
        Login {},

        #[route("/forgot-password")]
        ForgotPassword {},

        #[route("/reset-password")]
        ResetPassword {},

    #[end_layout]

    #[nest("/dashboard")]

        #[layout(AuthLayout)]

        #[route("/")]
        Dashboard {},

        #[route("/admins")]
        Admins {},

        #[route("/users")]
        Users {},

        #[route("/crew")]
        Crew {},

        #[route("/superintendents")]
        Superintendents {},

        #[route("/ships")]
        Ships {},

        #[route("/ships/:id")]
        ShipDetails { id: String },

        #[route("/documents")]
        Documents {},

        #[route("/:..segments")]
        AuthNotFound { segments: Vec<String> },

        #[end_layout]

    #[end_nest]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl Route {
    /// Screen a role lands on after signing in
    pub fn landing(role: Role) -> Route {
        match role {
            Role::Superadmin => Route::Admins {},
            Role::Admin => Route::Ships {},
            _ => Route::Login {},
        }
    }

    /// Screen listing accounts of `role`
    pub fn accounts(role: Role) -> Route {
        match role {
            Role::Admin | Role::Superadmin => Route::Admins {},
            Role::User => Route::Users {},
            Role::Crew => Route::Crew {},
            Role::Superintendent => Route::Superintendents {},
        }
    }
}
