use leptos::prelude::*;

fn outline(paths: &'static [&'static str]) -> AnyView {
    view! {
        <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
            {paths.iter().map(|d| view! { <path d=*d /> }).collect_view()}
        </svg>
    }
    .into_any()
}

pub fn icon(name: &str) -> AnyView {
    match name {
        "layout-dashboard" => outline(&[
            "M3 3h7v9H3z",
            "M14 3h7v5h-7z",
            "M14 12h7v9h-7z",
            "M3 16h7v5H3z",
        ]),
        "wallet" => outline(&[
            "M19 7V4a1 1 0 0 0-1-1H5a2 2 0 0 0 0 4h15a1 1 0 0 1 1 1v4h-3a2 2 0 0 0 0 4h3a1 1 0 0 0 1-1v-2a1 1 0 0 0-1-1",
            "M3 5v14a2 2 0 0 0 2 2h15a1 1 0 0 0 1-1v-4",
        ]),
        "credit-card" => outline(&[
            "M2 7a2 2 0 0 1 2-2h16a2 2 0 0 1 2 2v10a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2z",
            "M2 10h20",
        ]),
        "arrow-left-right" => outline(&["M8 3 4 7l4 4", "M4 7h16", "m16 21 4-4-4-4", "M20 17H4"]),
        "trending-up" => outline(&["M22 7 13.5 15.5 8.5 10.5 2 17", "M16 7h6v6"]),
        "trending-down" => outline(&["M22 17 13.5 8.5 8.5 13.5 2 7", "M16 17h6v-6"]),
        "activity" => outline(&["M22 12h-4l-3 9L9 3l-3 9H2"]),
        "plug" => outline(&[
            "M12 22v-5",
            "M9 8V2",
            "M15 8V2",
            "M18 8v5a4 4 0 0 1-4 4h-4a4 4 0 0 1-4-4V8z",
        ]),
        "landmark" => outline(&[
            "M3 22h18",
            "M6 18v-7",
            "M10 18v-7",
            "M14 18v-7",
            "M18 18v-7",
            "M12 2l8 5H4z",
        ]),
        "message-circle" => outline(&["M7.9 20A9 9 0 1 0 4 16.1L2 22z"]),
        "settings" => outline(&[
            "M12 15a3 3 0 1 0 0-6 3 3 0 0 0 0 6z",
            "M19.4 15a1.65 1.65 0 0 0 .33 1.82l.06.06a2 2 0 1 1-2.83 2.83l-.06-.06a1.65 1.65 0 0 0-1.82-.33 1.65 1.65 0 0 0-1 1.51V21a2 2 0 1 1-4 0v-.09A1.65 1.65 0 0 0 9 19.4a1.65 1.65 0 0 0-1.82.33l-.06.06a2 2 0 1 1-2.83-2.83l.06-.06a1.65 1.65 0 0 0 .33-1.82 1.65 1.65 0 0 0-1.51-1H3a2 2 0 1 1 0-4h.09A1.65 1.65 0 0 0 4.6 9a1.65 1.65 0 0 0-.33-1.82l-.06-.06a2 2 0 1 1 2.83-2.83l.06.06a1.65 1.65 0 0 0 1.82.33H9a1.65 1.65 0 0 0 1-1.51V3a2 2 0 1 1 4 0v.09a1.65 1.65 0 0 0 1 1.51 1.65 1.65 0 0 0 1.82-.33l.06-.06a2 2 0 1 1 2.83 2.83l-.06.06a1.65 1.65 0 0 0-.33 1.82V9a1.65 1.65 0 0 0 1.51 1H21a2 2 0 1 1 0 4h-.09a1.65 1.65 0 0 0-1.51 1z",
        ]),
        "user" => outline(&[
            "M20 21v-2a4 4 0 0 0-4-4H8a4 4 0 0 0-4 4v2",
            "M12 11a4 4 0 1 0 0-8 4 4 0 0 0 0 8z",
        ]),
        "log-out" => outline(&[
            "M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4",
            "m16 17 5-5-5-5",
            "M21 12H9",
        ]),
        "panel-left-close" => outline(&[
            "M5 3h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2z",
            "M9 3v18",
            "m16 15-3-3 3-3",
        ]),
        "panel-left-open" => outline(&[
            "M5 3h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2z",
            "M9 3v18",
            "m14 9 3 3-3 3",
        ]),
        "percent" => outline(&[
            "M19 5 5 19",
            "M6.5 9a2.5 2.5 0 1 0 0-5 2.5 2.5 0 0 0 0 5z",
            "M17.5 20a2.5 2.5 0 1 0 0-5 2.5 2.5 0 0 0 0 5z",
        ]),
        "dollar-sign" => outline(&["M12 2v20", "M17 5H9.5a3.5 3.5 0 0 0 0 7h5a3.5 3.5 0 0 1 0 7H6"]),
        "hash" => outline(&["M4 9h16", "M4 15h16", "M10 3 8 21", "M16 3l-2 18"]),
        "trash" => outline(&[
            "M3 6h18",
            "M19 6v14a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V6",
            "M8 6V4a2 2 0 0 1 2-2h4a2 2 0 0 1 2 2v2",
        ]),
        "refresh" => outline(&["M21 12a9 9 0 1 1-3-6.7L21 8", "M21 3v5h-5"]),
        "plus" => outline(&["M12 5v14", "M5 12h14"]),
        "check" => outline(&["M20 6 9 17l-5-5"]),
        "archive" => outline(&["M3 3h18v5H3z", "M5 8v11a2 2 0 0 0 2 2h10a2 2 0 0 0 2-2V8", "M10 12h4"]),
        "power" => outline(&["M12 2v10", "M18.4 6.6a9 9 0 1 1-12.8 0"]),
        "tag" => outline(&["M12 2H2v10l9.3 9.3a1 1 0 0 0 1.4 0l8.6-8.6a1 1 0 0 0 0-1.4z", "M7 7h.01"]),
        "chevron-right" => outline(&["m9 18 6-6-6-6"]),
        "chevron-down" => outline(&["m6 9 6 6 6-6"]),
        _ => outline(&["M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20z", "M12 8v4l3 3"]),
    }
}
