// SPDX-License-Identifier: MPL-2.0
use iced_stack::app::{self, Flags};
use iced_stack::ui::theming::ThemeMode;
use pico_args;

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let theme = args
        .opt_value_from_str::<_, String>("--theme")
        .unwrap()
        .and_then(|value| ThemeMode::parse(&value))
        .unwrap_or_default();

    let flags = Flags {
        subject: args.opt_value_from_str("--subject").unwrap(),
        manifest: args.opt_value_from_str("--manifest").unwrap(),
        theme,
    };

    app::run(flags)
}
