//! Defines the graphical rendering of a fitted decision tree.
//!
//! Rendering needs the external `dot` binary of Graphviz.
//! Its presence is an explicit capability the caller resolves once
//! (see [`RenderCapabilities`]) and injects as a [`DotRenderer`];
//! a missing renderer degrades to a descriptive message,
//! never to an error.
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::error::Error;
use super::fitted::FittedTree;
use super::dot::DotExport;


/// Message returned when no renderer is available.
const NO_GRAPHVIZ: &str =
    "You need to install graphviz to visualize decision trees";


/// Image formats a [`DotRenderer`] can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    /// Portable Network Graphics, for inline display.
    Png,
    /// Portable Document Format, for file output.
    Pdf,
}


impl ImageFormat {
    /// The `-T` flag the `dot` binary expects.
    #[inline]
    fn flag(self) -> &'static str {
        match self {
            Self::Png => "-Tpng",
            Self::Pdf => "-Tpdf",
        }
    }
}


/// Renders DOT source into an image.
/// Implement this trait to supply your own rendering pipeline;
/// [`DotCommand`] shells out to the Graphviz `dot` binary.
pub trait DotRenderer {
    /// Render `dot` source into an image of the requested format.
    fn render(&self, dot: &str, format: ImageFormat) -> io::Result<Vec<u8>>;
}


/// A [`DotRenderer`] that pipes the source through the external
/// `dot` binary.
#[derive(Debug, Clone)]
pub struct DotCommand {
    program: String,
}


impl Default for DotCommand {
    fn default() -> Self {
        Self { program: String::from("dot") }
    }
}


impl DotCommand {
    /// Construct a `DotCommand` that invokes `dot` from the search path.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }


    /// Override the program name/path of the `dot` binary.
    #[inline]
    pub fn program<T: ToString>(mut self, program: T) -> Self {
        self.program = program.to_string();
        self
    }
}


impl DotRenderer for DotCommand {
    fn render(&self, dot: &str, format: ImageFormat) -> io::Result<Vec<u8>> {
        let mut child = Command::new(&self.program)
            .arg(format.flag())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()?;

        match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(dot.as_bytes())?,
            None => return Err(io::Error::new(
                io::ErrorKind::BrokenPipe,
                "failed to open stdin of the dot process",
            )),
        }

        let output = child.wait_with_output()?;
        if !output.status.success() {
            return Err(io::Error::new(
                io::ErrorKind::Other,
                format!("dot exited with {status}", status = output.status),
            ));
        }
        Ok(output.stdout)
    }
}


/// Which optional rendering capabilities are present.
/// Resolve this once at startup and decide from it which renderer
/// (if any) to inject into [`TreePlot`].
#[derive(Debug, Clone, Copy)]
pub struct RenderCapabilities {
    /// `true` if the Graphviz `dot` binary responds on the search path.
    pub graphviz: bool,
}


impl RenderCapabilities {
    /// Probe the environment for the `dot` binary.
    pub fn detect() -> Self {
        let graphviz = Command::new("dot")
            .arg("-V")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|status| status.success())
            .unwrap_or(false);
        Self { graphviz }
    }


    /// Capabilities with every renderer absent.
    pub const fn none() -> Self {
        Self { graphviz: false }
    }
}


/// Result of a [`TreePlot::render`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    /// No renderer was supplied; carries a descriptive message.
    Unavailable(String),
    /// Rendered PNG bytes, ready for inline display.
    Image(Vec<u8>),
    /// A PDF was written to the given path.
    Written(PathBuf),
}


/// Draws a [`FittedTree`] through an injected [`DotRenderer`].
///
/// # Example
///
/// ```no_run
/// use minicharts::{FittedTree, TreePlot, RenderCapabilities, DotCommand};
///
/// # fn tree() -> FittedTree { unimplemented!() }
/// let tree: FittedTree = tree();
/// let caps = RenderCapabilities::detect();
/// let dot = DotCommand::new();
///
/// let mut plot = TreePlot::new(&tree)
///     .feature_names(&["income", "age"]);
/// if caps.graphviz {
///     plot = plot.renderer(&dot);
/// }
/// let outcome = plot.render().unwrap();
/// println!("{outcome:?}");
/// ```
pub struct TreePlot<'a> {
    tree: &'a FittedTree,
    feature_names: Option<Vec<String>>,
    class_names: Option<Vec<String>>,
    max_depth: Option<usize>,
    rotate: bool,
    pdf_file: Option<PathBuf>,
    renderer: Option<&'a dyn DotRenderer>,
}


impl<'a> TreePlot<'a> {
    /// Construct a new `TreePlot` for the given tree.
    /// Without [`TreePlot::renderer`] the plot renders to
    /// [`RenderOutcome::Unavailable`].
    #[inline]
    pub fn new(tree: &'a FittedTree) -> Self {
        Self {
            tree,
            feature_names: None,
            class_names: None,
            max_depth: None,
            rotate: false,
            pdf_file: None,
            renderer: None,
        }
    }


    /// Set the feature names shown in the split rules.
    #[inline]
    pub fn feature_names<T: ToString>(mut self, names: &[T]) -> Self {
        self.feature_names = Some(
            names.iter().map(|name| name.to_string()).collect()
        );
        self
    }


    /// Set the class names shown at the leaves.
    #[inline]
    pub fn class_names<T: ToString>(mut self, names: &[T]) -> Self {
        self.class_names = Some(
            names.iter().map(|name| name.to_string()).collect()
        );
        self
    }


    /// Limit the depth of the drawn graph.
    #[inline]
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }


    /// Rotate the layout of the graph.
    #[inline]
    pub fn rotate(mut self, rotate: bool) -> Self {
        self.rotate = rotate;
        self
    }


    /// Write a PDF of the graph to `path` instead of
    /// returning PNG bytes.
    #[inline]
    pub fn pdf_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.pdf_file = Some(path.as_ref().to_path_buf());
        self
    }


    /// Inject the renderer to draw with.
    #[inline]
    pub fn renderer(mut self, renderer: &'a dyn DotRenderer) -> Self {
        self.renderer = Some(renderer);
        self
    }


    /// Render the tree.
    ///
    /// Returns [`RenderOutcome::Unavailable`] (not an error) when no
    /// renderer was injected. Renderer and I/O failures, as well as a
    /// malformed tree, surface as [`Error`].
    pub fn render(&self) -> Result<RenderOutcome, Error> {
        let Some(renderer) = self.renderer else {
            return Ok(RenderOutcome::Unavailable(String::from(NO_GRAPHVIZ)));
        };

        let mut export = DotExport::new(self.tree).rotate(self.rotate);
        if let Some(names) = &self.feature_names {
            export = export.feature_names(names);
        }
        if let Some(names) = &self.class_names {
            export = export.class_names(names);
        }
        if let Some(depth) = self.max_depth {
            export = export.max_depth(depth);
        }
        let dot = export.export()?;

        if let Some(path) = &self.pdf_file {
            let bytes = renderer.render(&dot, ImageFormat::Pdf)?;
            fs::write(path, bytes)?;
            return Ok(RenderOutcome::Written(path.clone()));
        }

        let bytes = renderer.render(&dot, ImageFormat::Png)?;
        Ok(RenderOutcome::Image(bytes))
    }
}
