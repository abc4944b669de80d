use leptos::*;

use desktop_runtime::{FluentIcon, IconName, IconSize};

struct Machine {
    name: &'static str,
    specs: &'static [(&'static str, &'static str)],
}

static SETUP: [Machine; 2] = [
    Machine {
        name: "MacBook Air 14\"",
        specs: &[("Processor", "M1"), ("Memory", "8GB"), ("Storage", "256GB SSD")],
    },
    Machine {
        name: "Custom Gaming PC",
        specs: &[
            ("Processor", "Ryzen 7 5800X"),
            ("GPU", "RTX 3060"),
            ("Motherboard", "B450M PRO-M2"),
            ("Cooling", "DeepCool LE520"),
            ("Memory", "16GB DDR4"),
            ("Storage", "1TB SSD"),
            ("PSU", "Corsair CX750"),
        ],
    },
];

#[component]
/// Modal "My Setup" dialog opened from the menu bar. A click outside the panel closes it.
pub fn AboutDialog(#[prop(into)] on_close: Callback<()>) -> impl IntoView {
    view! {
        <div class="about-overlay" on:click=move |_| on_close.call(())>
            <section
                class="about-dialog"
                role="dialog"
                aria-label="About"
                on:click=|ev| ev.stop_propagation()
            >
                <header class="about-titlebar">
                    <button type="button" aria-label="Close" on:click=move |_| on_close.call(())>
                        <FluentIcon icon=IconName::Dismiss size=IconSize::Sm />
                    </button>
                </header>
                <h2>"My Setup"</h2>
                <div class="about-columns">
                    {SETUP
                        .iter()
                        .map(|machine| view! {
                            <div class="about-machine">
                                <h3>{machine.name}</h3>
                                <dl>
                                    {machine
                                        .specs
                                        .iter()
                                        .map(|(label, value)| view! {
                                            <dt>{*label}</dt>
                                            <dd>{*value}</dd>
                                        })
                                        .collect_view()}
                                </dl>
                            </div>
                        })
                        .collect_view()}
                </div>
            </section>
        </div>
    }
}
