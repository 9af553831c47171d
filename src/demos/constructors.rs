//! Constructor patterns: `new`, `Default`, and a builder. Rust has no
//! constructor overloading; each pattern replaces one overload family.

#[derive(Debug, Clone)]
struct ServerConfig {
    host: String,
    port: u16,
    workers: usize,
    verbose: bool,
}

impl ServerConfig {
    /// The common case, fully specified.
    fn new(host: &str, port: u16) -> Self {
        Self {
            host: host.to_string(),
            port,
            ..Self::default()
        }
    }

    fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder {
            config: Self::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 8080,
            workers: 4,
            verbose: false,
        }
    }
}

/// Builder for the long-option-list case a telescoping constructor would
/// otherwise cover.
struct ServerConfigBuilder {
    config: ServerConfig,
}

impl ServerConfigBuilder {
    fn host(mut self, host: &str) -> Self {
        self.config.host = host.to_string();
        self
    }

    fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    fn workers(mut self, workers: usize) -> Self {
        self.config.workers = workers;
        self
    }

    fn verbose(mut self) -> Self {
        self.config.verbose = true;
        self
    }

    fn build(self) -> ServerConfig {
        self.config
    }
}

pub fn run() {
    println!("Constructor patterns\n");

    let default = ServerConfig::default();
    let plain = ServerConfig::new("0.0.0.0", 9000);
    let built = ServerConfig::builder()
        .host("10.0.0.5")
        .port(8443)
        .workers(16)
        .verbose()
        .build();

    println!("Default::default -> {:?}", default);
    println!("new              -> {:?}", plain);
    println!("builder          -> {:?}", built);
}
