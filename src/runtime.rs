use ort::session::builder::{GraphOptimizationLevel, SessionBuilder};
use ort::session::Session;
use ort::Result as OrtResult;
use std::sync::Once;

// The ONNX Runtime environment is process-global and must be committed
// exactly once, before the first session is built.
static INIT: Once = Once::new();

/// Session tuning knobs applied when the model artifact is loaded.
///
/// The defaults leave threading decisions to ONNX Runtime, which is the
/// right call for a process that builds a single session at startup.
#[derive(Debug)]
pub struct RuntimeConfig {
    /// Threads for parallel graph execution; 0 lets the runtime decide.
    pub inter_threads: usize,
    /// Threads within individual operators; 0 lets the runtime decide.
    pub intra_threads: usize,
    pub optimization_level: GraphOptimizationLevel,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            inter_threads: 0,
            intra_threads: 0,
            optimization_level: GraphOptimizationLevel::Level3,
        }
    }
}

// GraphOptimizationLevel does not implement Clone, so spell it out.
fn copy_level(level: &GraphOptimizationLevel) -> GraphOptimizationLevel {
    match level {
        GraphOptimizationLevel::Disable => GraphOptimizationLevel::Disable,
        GraphOptimizationLevel::Level1 => GraphOptimizationLevel::Level1,
        GraphOptimizationLevel::Level2 => GraphOptimizationLevel::Level2,
        GraphOptimizationLevel::Level3 => GraphOptimizationLevel::Level3,
    }
}

impl Clone for RuntimeConfig {
    fn clone(&self) -> Self {
        Self {
            inter_threads: self.inter_threads,
            intra_threads: self.intra_threads,
            optimization_level: copy_level(&self.optimization_level),
        }
    }
}

/// Commits the shared ONNX Runtime environment on first use.
pub fn ensure_initialized() -> OrtResult<()> {
    INIT.call_once(|| {
        ort::init()
            .with_name("foliar")
            .commit()
            .expect("Failed to initialize ONNX Runtime environment");
    });
    Ok(())
}

/// Builds a [`SessionBuilder`] configured from `config`, initializing the
/// shared environment if this is the first session of the process.
pub fn create_session_builder(config: &RuntimeConfig) -> OrtResult<SessionBuilder> {
    ensure_initialized()?;
    let mut builder = Session::builder()?;
    if config.inter_threads > 0 {
        builder = builder.with_inter_threads(config.inter_threads)?;
    }
    if config.intra_threads > 0 {
        builder = builder.with_intra_threads(config.intra_threads)?;
    }
    builder = builder.with_optimization_level(copy_level(&config.optimization_level))?;
    Ok(builder)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialization_is_idempotent() {
        assert!(ensure_initialized().is_ok());
        assert!(ensure_initialized().is_ok());
    }

    #[test]
    fn test_clone_preserves_config() {
        let config = RuntimeConfig {
            inter_threads: 4,
            intra_threads: 2,
            optimization_level: GraphOptimizationLevel::Level1,
        };
        let cloned = config.clone();
        assert_eq!(cloned.inter_threads, 4);
        assert_eq!(cloned.intra_threads, 2);
        assert!(matches!(
            cloned.optimization_level,
            GraphOptimizationLevel::Level1
        ));
    }

    #[test]
    fn test_session_builder_from_config() {
        let config = RuntimeConfig {
            inter_threads: 2,
            intra_threads: 2,
            optimization_level: GraphOptimizationLevel::Level2,
        };
        assert!(create_session_builder(&config).is_ok());
    }
}
