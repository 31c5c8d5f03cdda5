pub mod dashboard;
pub mod journals;
pub mod manuscripts;
pub mod not_found;
pub mod posts;
pub mod profile;
pub mod sign_in;
pub mod sign_up;
pub mod site;
pub mod taxonomy;
pub mod users;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBell, LdBookOpen, LdBriefcase, LdFileText, LdFolder, LdLayoutDashboard, LdPackage,
    LdSettings, LdUsers,
};
use dioxus_free_icons::Icon;
use shared_types::{Authorization, RedirectTarget, RouteAccess};
use shared_ui::{
    Button, ButtonVariant, DropdownMenu, DropdownMenuContent, DropdownMenuItem,
    DropdownMenuLabel, DropdownMenuSeparator, DropdownMenuTrigger, Navbar, NavbarBrand,
    NavbarLinks, NavbarSpacer, Sidebar, SidebarContent, SidebarFooter, SidebarGroup,
    SidebarHeader, SidebarInset, SidebarMenuButton, SidebarMenuItem, SidebarProvider,
    SidebarTrigger, UserAvatar,
};

use crate::session::{use_api, use_session, use_sidebar_visibility};
use dashboard::Dashboard;
use not_found::NotFound;
use profile::Profile;
use sign_in::SignIn;
use sign_up::SignUp;
use site::{BlogList, BlogPost, JournalCatalogue, JournalPage, Landing, NewsFeed};

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AccessGuard)]
        #[layout(PublicLayout)]
            #[route("/")]
            Landing {},
            #[route("/journals")]
            JournalCatalogue {},
            #[route("/journals/:id")]
            JournalPage { id: i64 },
            #[route("/blogs")]
            BlogList {},
            #[route("/blogs/:id")]
            BlogPost { id: i64 },
            #[route("/news")]
            NewsFeed {},
            #[route("/sign-in")]
            SignIn {},
            #[route("/sign-up")]
            SignUp {},
        #[end_layout]
        #[layout(DashboardLayout)]
            #[route("/dashboard")]
            Dashboard {},
            #[route("/dashboard/categories")]
            Categories {},
            #[route("/dashboard/groups")]
            Groups {},
            #[route("/dashboard/journals")]
            ManageJournals {},
            #[route("/dashboard/blogs")]
            ManageBlogs {},
            #[route("/dashboard/news")]
            ManageNews {},
            #[route("/dashboard/users")]
            Users {},
            #[route("/dashboard/manuscripts")]
            Manuscripts {},
            #[route("/dashboard/manuscripts/new")]
            SubmitManuscript {},
            #[route("/dashboard/manuscripts/:id")]
            ManuscriptDetail { id: i64 },
            #[route("/dashboard/profile")]
            Profile {},
        #[end_layout]
        #[layout(PublicLayout)]
            #[route("/:..route")]
            NotFound { route: Vec<String> },
        #[end_layout]
    #[end_layout]
}

impl Route {
    /// Who may see this route. Every variant is listed so a new route cannot
    /// be added without classifying it.
    pub fn access(&self) -> RouteAccess {
        match self {
            Route::Landing {}
            | Route::JournalCatalogue {}
            | Route::JournalPage { .. }
            | Route::BlogList {}
            | Route::BlogPost { .. }
            | Route::NewsFeed {}
            | Route::NotFound { .. } => RouteAccess::Public,
            Route::SignIn {} | Route::SignUp {} => RouteAccess::PublicOnly,
            Route::Dashboard {}
            | Route::Categories {}
            | Route::Groups {}
            | Route::ManageJournals {}
            | Route::ManageBlogs {}
            | Route::ManageNews {}
            | Route::Users {}
            | Route::Manuscripts {}
            | Route::SubmitManuscript {}
            | Route::ManuscriptDetail { .. }
            | Route::Profile {} => RouteAccess::Protected,
        }
    }

    pub fn redirect_target(target: RedirectTarget) -> Route {
        match target {
            RedirectTarget::Landing => Route::Landing {},
            RedirectTarget::Dashboard => Route::Dashboard {},
        }
    }

    fn page_title(&self) -> &'static str {
        match self {
            Route::Dashboard {} => "Dashboard",
            Route::Categories {} => "Categories",
            Route::Groups {} => "Groups",
            Route::ManageJournals {} => "Journals",
            Route::ManageBlogs {} => "Blogs",
            Route::ManageNews {} => "News",
            Route::Users {} => "Users",
            Route::Manuscripts {} | Route::SubmitManuscript {} | Route::ManuscriptDetail { .. } => {
                "Manuscripts"
            }
            Route::Profile {} => "Profile",
            _ => "",
        }
    }
}

/// Applies the route's access class to the current session.
///
/// Runs on every render, so signing in or out re-evaluates the page that is
/// already on screen. Redirects replace the history entry.
#[component]
fn AccessGuard() -> Element {
    let route: Route = use_route();
    let session = use_session();

    match route.access().authorize(session.is_authenticated()) {
        Authorization::Allow => rsx! { Outlet::<Route> {} },
        Authorization::Redirect(target) => {
            tracing::debug!(from = %route, ?target, "redirecting");
            navigator().replace(Route::redirect_target(target));
            rsx! {
                div { class: "guard-redirect", "Redirecting..." }
            }
        }
    }
}

fn nav_class(active: bool) -> &'static str {
    if active {
        "active"
    } else {
        ""
    }
}

/// Marketing site chrome: top navigation and footer.
#[component]
fn PublicLayout() -> Element {
    let route: Route = use_route();
    let session = use_session();
    let journals_class = nav_class(matches!(route, Route::JournalCatalogue {} | Route::JournalPage { .. }));
    let blogs_class = nav_class(matches!(route, Route::BlogList {} | Route::BlogPost { .. }));
    let news_class = nav_class(matches!(route, Route::NewsFeed {}));

    rsx! {
        div { class: "site",
            Navbar { sticky: true,
                NavbarBrand {
                    Link { to: Route::Landing {}, "Journal Desk" }
                }
                NavbarLinks {
                    Link {
                        to: Route::JournalCatalogue {},
                        class: journals_class,
                        "Journals"
                    }
                    Link {
                        to: Route::BlogList {},
                        class: blogs_class,
                        "Blog"
                    }
                    Link {
                        to: Route::NewsFeed {},
                        class: news_class,
                        "News"
                    }
                }
                NavbarSpacer {}
                if session.is_authenticated() {
                    Link { to: Route::Dashboard {},
                        Button { variant: ButtonVariant::Primary, "Dashboard" }
                    }
                } else {
                    Link { to: Route::SignIn {},
                        Button { variant: ButtonVariant::Ghost, "Sign in" }
                    }
                    Link { to: Route::SignUp {},
                        Button { variant: ButtonVariant::Primary, "Sign up" }
                    }
                }
            }
            main { class: "site-main", Outlet::<Route> {} }
            footer { class: "site-footer",
                span { "Journal Desk" }
                span { class: "site-footer-muted", "Open scholarship, edited in the open." }
            }
        }
    }
}

/// Signed-in shell: role-filtered sidebar plus a navbar with the user menu.
#[component]
fn DashboardLayout() -> Element {
    let route: Route = use_route();
    let mut session = use_session();
    let client = use_api();
    let vis = use_sidebar_visibility();

    let user = session.user();
    let display_name = user.as_ref().map(|u| u.name.clone()).unwrap_or_default();
    let email = user.as_ref().map(|u| u.email.clone()).unwrap_or_default();
    let role_label = user.as_ref().map(|u| u.role_label()).unwrap_or_default();
    let initials = user.as_ref().map(|u| u.initials()).unwrap_or_default();
    let avatar = user
        .as_ref()
        .and_then(|u| u.image.as_deref())
        .map(|path| client.config().asset_url(path));
    let page_title = route.page_title();

    rsx! {
        SidebarProvider { default_open: false,
            Sidebar {
                SidebarHeader {
                    Link { to: Route::Landing {}, class: "sidebar-brand", "Journal Desk" }
                }
                SidebarContent {
                    SidebarGroup { label: "Workspace",
                        SidebarMenuItem {
                            Link { to: Route::Dashboard {},
                                SidebarMenuButton { active: matches!(route, Route::Dashboard {}),
                                    Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 }
                                    "Dashboard"
                                }
                            }
                        }
                        if vis.manuscripts {
                            SidebarMenuItem {
                                Link { to: Route::Manuscripts {},
                                    SidebarMenuButton {
                                        active: matches!(route, Route::Manuscripts {} | Route::SubmitManuscript {} | Route::ManuscriptDetail { .. }),
                                        Icon::<LdBriefcase> { icon: LdBriefcase, width: 18, height: 18 }
                                        "Manuscripts"
                                    }
                                }
                            }
                        }
                    }

                    if vis.journals || vis.taxonomy {
                        SidebarGroup { label: "Catalogue",
                            if vis.journals {
                                SidebarMenuItem {
                                    Link { to: Route::ManageJournals {},
                                        SidebarMenuButton { active: matches!(route, Route::ManageJournals {}),
                                            Icon::<LdBookOpen> { icon: LdBookOpen, width: 18, height: 18 }
                                            "Journals"
                                        }
                                    }
                                }
                            }
                            if vis.taxonomy {
                                SidebarMenuItem {
                                    Link { to: Route::Categories {},
                                        SidebarMenuButton { active: matches!(route, Route::Categories {}),
                                            Icon::<LdFolder> { icon: LdFolder, width: 18, height: 18 }
                                            "Categories"
                                        }
                                    }
                                }
                                SidebarMenuItem {
                                    Link { to: Route::Groups {},
                                        SidebarMenuButton { active: matches!(route, Route::Groups {}),
                                            Icon::<LdPackage> { icon: LdPackage, width: 18, height: 18 }
                                            "Groups"
                                        }
                                    }
                                }
                            }
                        }
                    }

                    if vis.content {
                        SidebarGroup { label: "Content",
                            SidebarMenuItem {
                                Link { to: Route::ManageBlogs {},
                                    SidebarMenuButton { active: matches!(route, Route::ManageBlogs {}),
                                        Icon::<LdFileText> { icon: LdFileText, width: 18, height: 18 }
                                        "Blogs"
                                    }
                                }
                            }
                            SidebarMenuItem {
                                Link { to: Route::ManageNews {},
                                    SidebarMenuButton { active: matches!(route, Route::ManageNews {}),
                                        Icon::<LdBell> { icon: LdBell, width: 18, height: 18 }
                                        "News"
                                    }
                                }
                            }
                        }
                    }

                    if vis.users {
                        SidebarGroup { label: "Administration",
                            SidebarMenuItem {
                                Link { to: Route::Users {},
                                    SidebarMenuButton { active: matches!(route, Route::Users {}),
                                        Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 }
                                        "Users"
                                    }
                                }
                            }
                        }
                    }

                    SidebarGroup { label: "Account",
                        SidebarMenuItem {
                            Link { to: Route::Profile {},
                                SidebarMenuButton { active: matches!(route, Route::Profile {}),
                                    Icon::<LdSettings> { icon: LdSettings, width: 18, height: 18 }
                                    "Profile"
                                }
                            }
                        }
                    }
                }
                SidebarFooter { "Signed in as {role_label}" }
            }

            SidebarInset {
                Navbar {
                    SidebarTrigger {}
                    span { class: "navbar-title", "{page_title}" }
                    NavbarSpacer {}
                    DropdownMenu {
                        DropdownMenuTrigger {
                            UserAvatar { image: avatar, initials: initials }
                        }
                        DropdownMenuContent {
                            DropdownMenuLabel {
                                div { class: "user-menu-name", "{display_name}" }
                                div { class: "user-menu-email", "{email}" }
                            }
                            DropdownMenuSeparator {}
                            DropdownMenuItem::<String> {
                                value: "profile".to_string(),
                                index: 0usize,
                                on_select: move |_: String| {
                                    navigator().push(Route::Profile {});
                                },
                                "Profile"
                            }
                            DropdownMenuItem::<String> {
                                value: "site".to_string(),
                                index: 1usize,
                                on_select: move |_: String| {
                                    navigator().push(Route::Landing {});
                                },
                                "Visit site"
                            }
                            DropdownMenuSeparator {}
                            DropdownMenuItem::<String> {
                                value: "logout".to_string(),
                                index: 2usize,
                                on_select: move |_: String| {
                                    let client = client.clone();
                                    spawn(async move {
                                        // The local session ends regardless of what the API says.
                                        if let Err(e) = client.logout().await {
                                            tracing::warn!(error = %e, "logout request failed");
                                        }
                                    });
                                    session.sign_out();
                                },
                                "Sign out"
                            }
                        }
                    }
                }

                div { class: "page-content", Outlet::<Route> {} }
            }
        }
    }
}

#[component]
fn Categories() -> Element {
    rsx! { taxonomy::list::TaxonomyListPage { kind: taxonomy::TaxonomyKind::Category } }
}

#[component]
fn Groups() -> Element {
    rsx! { taxonomy::list::TaxonomyListPage { kind: taxonomy::TaxonomyKind::Group } }
}

#[component]
fn ManageJournals() -> Element {
    rsx! { journals::list::JournalListPage {} }
}

#[component]
fn ManageBlogs() -> Element {
    rsx! { posts::list::PostListPage { kind: posts::PostKind::Blog } }
}

#[component]
fn ManageNews() -> Element {
    rsx! { posts::list::PostListPage { kind: posts::PostKind::News } }
}

#[component]
fn Users() -> Element {
    rsx! { users::list::UserListPage {} }
}

#[component]
fn Manuscripts() -> Element {
    rsx! { manuscripts::list::ManuscriptListPage {} }
}

#[component]
fn SubmitManuscript() -> Element {
    rsx! { manuscripts::submit::SubmitManuscriptPage {} }
}

#[component]
fn ManuscriptDetail(id: i64) -> Element {
    rsx! { manuscripts::detail::ManuscriptDetailPage { id } }
}
