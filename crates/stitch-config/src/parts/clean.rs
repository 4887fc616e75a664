use crate::fragment::{ConfigFragment, PluginSpec};

/// Empty the output directory before each build.
pub fn clean_output() -> ConfigFragment {
    ConfigFragment::from_plugin(PluginSpec::CleanOutput)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registers_only_the_cleanup_plugin() {
        let fragment = clean_output();
        assert_eq!(fragment.plugins, vec![PluginSpec::CleanOutput]);
        assert!(fragment.rules().is_empty());
        assert!(fragment.optimization.is_none());
    }
}
