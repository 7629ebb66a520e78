use dioxus::prelude::*;

use crate::{client::router::Route, model::staff::StaffDto};

/// Members whose display name contains `query`, ignoring case. A blank query keeps
/// everyone.
pub fn filter_roster<'a>(staff: &'a [StaffDto], query: &str) -> Vec<&'a StaffDto> {
    let query = query.trim().to_lowercase();

    staff
        .iter()
        .filter(|member| query.is_empty() || member.display_name.to_lowercase().contains(&query))
        .collect()
}

#[component]
pub fn RosterSidebar(staff: Vec<StaffDto>, selected: Option<u64>) -> Element {
    let mut search = use_signal(String::new);

    let query = search();
    let visible: Vec<(StaffDto, &str)> = filter_roster(&staff, &query)
        .into_iter()
        .map(|member| {
            let class = if selected == Some(member.id) { "menu-active" } else { "" };
            (member.clone(), class)
        })
        .collect();
    let on_leave = staff.iter().filter(|m| m.loa.is_some()).count();

    rsx! {
        aside {
            class: "card bg-base-200 w-full lg:w-80 shrink-0",
            div {
                class: "card-body p-4 gap-3",
                div {
                    class: "flex items-center justify-between",
                    h2 { class: "font-semibold", "Staff" }
                    span {
                        class: "text-sm opacity-70",
                        "{staff.len()} members, {on_leave} on leave"
                    }
                }
                input {
                    r#type: "search",
                    class: "input input-bordered input-sm w-full",
                    placeholder: "Search by name",
                    value: "{query}",
                    oninput: move |evt| search.set(evt.value()),
                }
                ul {
                    class: "menu p-0 max-h-[70vh] overflow-y-auto flex-nowrap",
                    for (member, item_class) in visible {
                        li {
                            key: "{member.id}",
                            Link {
                                to: Route::Member { id: member.id },
                                class: item_class,
                                img {
                                    src: "{member.avatar_url}",
                                    alt: "",
                                    class: "w-8 h-8 rounded-full",
                                }
                                div {
                                    class: "flex flex-col min-w-0",
                                    span { class: "truncate", "{member.display_name}" }
                                    span { class: "text-xs opacity-60", "{member.rank_name}" }
                                }
                                if member.loa.is_some() {
                                    span { class: "badge badge-warning badge-sm ml-auto", "LOA" }
                                }
                            }
                        }
                    }
                    if staff.is_empty() {
                        li { class: "opacity-60 p-2", "No staff synced yet." }
                    }
                }
            }
        }
    }
}
