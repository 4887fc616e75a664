use crate::fragment::{ClientOptions, ConfigFragment, DevServerOptions};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DevServerParams {
    pub host: Option<String>,
    pub port: Option<u16>,
}

/// Local serving with history fallback and live reload; hot module
/// replacement stays off.
pub fn dev_server(params: DevServerParams) -> ConfigFragment {
    ConfigFragment {
        dev_server: Some(DevServerOptions {
            host: params.host,
            port: params.port,
            history_api_fallback: Some(true),
            live_reload: Some(true),
            client: Some(ClientOptions {
                overlay: Some(true),
            }),
            hot: Some(false),
        }),
        ..ConfigFragment::default()
    }
}
