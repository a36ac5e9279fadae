// SPDX-License-Identifier: MPL-2.0
use fishfoto::app::{self, Flags};

fn main() -> iced::Result {
    tracing_subscriber::fmt::init();

    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap(),
        endpoint: args.opt_value_from_str("--endpoint").unwrap(),
        file_path: args
            .finish()
            .into_iter()
            .next()
            .and_then(|s| s.into_string().ok()),
    };

    app::run(flags)
}
