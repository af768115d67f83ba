use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaFilePdf, FaHelmetSafety, FaShip, FaUserShield, FaUserTie, FaUsers,
};
use dioxus_free_icons::Icon;

use crate::{client::router::Route, model::account::Role};

#[component]
pub fn Sidebar(role: Role) -> Element {
    rsx! {
        aside { class: "w-60 shrink-0 bg-base-100 border-r border-base-300",
            ul { class: "menu w-full gap-1 p-3",
                for managed in role.managed_roles() {
                    li {
                        Link {
                            to: Route::accounts(managed),
                            active_class: "menu-active",
                            class: "flex gap-2",
                            match managed {
                                Role::Admin => rsx!(Icon { width: 16, height: 16, icon: FaUserShield }),
                                Role::User => rsx!(Icon { width: 16, height: 16, icon: FaUsers }),
                                Role::Crew => rsx!(Icon { width: 16, height: 16, icon: FaHelmetSafety }),
                                _ => rsx!(Icon { width: 16, height: 16, icon: FaUserTie }),
                            }
                            "{managed.plural_label()}"
                        }
                    }
                }
                if role.can_manage_ships() {
                    li {
                        Link {
                            to: Route::Ships {},
                            active_class: "menu-active",
                            class: "flex gap-2",
                            Icon { width: 16, height: 16, icon: FaShip }
                            "Ships"
                        }
                    }
                    li {
                        Link {
                            to: Route::Documents {},
                            active_class: "menu-active",
                            class: "flex gap-2",
                            Icon { width: 16, height: 16, icon: FaFilePdf }
                            "Documents"
                        }
                    }
                }
            }
        }
    }
}
