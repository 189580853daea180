use crate::ui::engine::EngineError;
use std::fmt;
use std::io;

#[derive(Debug)]
pub enum UiError {
    /// A frame was requested before `set_root`.
    NoRoot,
    /// An engine call outside container layout failed.
    Engine {
        op: &'static str,
        region: String,
        source: EngineError,
    },
    /// Drawing child `index` of a container into `region` failed.
    Draw {
        index: usize,
        region: String,
        source: Box<UiError>,
    },
    Io(io::Error),
}

impl UiError {
    pub(crate) fn engine(op: &'static str, region: &str, source: EngineError) -> Self {
        UiError::Engine {
            op,
            region: region.to_string(),
            source,
        }
    }

    /// The engine failure at the bottom of a `Draw` chain, if any.
    pub fn root_engine_error(&self) -> Option<&EngineError> {
        match self {
            UiError::Engine { source, .. } => Some(source),
            UiError::Draw { source, .. } => source.root_engine_error(),
            UiError::NoRoot | UiError::Io(_) => None,
        }
    }
}

impl fmt::Display for UiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UiError::NoRoot => write!(f, "no root widget specified"),
            UiError::Engine { op, region, source } => write!(f, "{op} {region:?}: {source}"),
            UiError::Draw {
                index,
                region,
                source,
            } => write!(f, "draw view {index} {region:?}: {source}"),
            UiError::Io(err) => write!(f, "terminal i/o: {err}"),
        }
    }
}

impl std::error::Error for UiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            UiError::NoRoot => None,
            UiError::Engine { source, .. } => Some(source),
            UiError::Draw { source, .. } => Some(source.as_ref()),
            UiError::Io(err) => Some(err),
        }
    }
}

impl From<io::Error> for UiError {
    fn from(err: io::Error) -> Self {
        UiError::Io(err)
    }
}
