//! Router generation configuration.

/// Predicate deciding which function names get routed.
pub type FunctionFilter = Box<dyn Fn(&str) -> bool + Send + Sync>;

/// Options for one generation run, with documented defaults.
///
/// Passed as a single argument so call sites never rely on positional
/// optional parameters.
///
/// # Example
///
/// ```
/// use router_codegen::RouterConfig;
///
/// let config = RouterConfig::new()
///     .with_router_name("CoreRouter")
///     .with_plain_eth_transfers(true);
/// assert_eq!(config.router_name, "CoreRouter");
/// ```
pub struct RouterConfig {
    /// Contract name given to the generated router. Default: `"Router"`.
    pub router_name: String,
    /// Custom source template; `None` uses the built-in router template.
    pub template: Option<String>,
    /// Emit a `receive()` stub accepting bare value transfers. Default: `false`.
    pub can_receive_plain_eth: bool,
    /// Function-name filter; `None` accepts every function.
    pub function_filter: Option<FunctionFilter>,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            router_name: "Router".to_string(),
            template: None,
            can_receive_plain_eth: false,
            function_filter: None,
        }
    }
}

impl RouterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_router_name(mut self, name: impl Into<String>) -> Self {
        self.router_name = name.into();
        self
    }

    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    pub fn with_plain_eth_transfers(mut self, enabled: bool) -> Self {
        self.can_receive_plain_eth = enabled;
        self
    }

    pub fn with_function_filter(
        mut self,
        filter: impl Fn(&str) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.function_filter = Some(Box::new(filter));
        self
    }

    /// Whether `name` passes the configured filter.
    pub fn accepts(&self, name: &str) -> bool {
        self.function_filter.as_ref().map_or(true, |f| f(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RouterConfig::default();
        assert_eq!(config.router_name, "Router");
        assert!(config.template.is_none());
        assert!(!config.can_receive_plain_eth);
        assert!(config.accepts("anything"));
    }

    #[test]
    fn test_function_filter() {
        let config = RouterConfig::new().with_function_filter(|name| !name.starts_with("c_"));
        assert!(config.accepts("transfer"));
        assert!(!config.accepts("c_0xdeadbeef"));
    }
}
