use core::fmt;
use core::panic::Location;

#[cfg(feature = "full-backtrace")]
use std::sync::OnceLock;

#[cfg(feature = "full-backtrace")]
use backtrace::{Backtrace, BacktraceFrame};

/// The maximum number of frames recorded for a single [`Stack`].
pub const MAX_DEPTH: usize = 32;

/// A call stack captured at the point an error was created or annotated.
///
/// The call-site [`Location`] is always recorded. With the `full-backtrace`
/// feature the frames above the call site are also captured, and symbolized
/// lazily the first time they are needed.
///
/// # Formatting
///
/// The `Display` implementation writes one block per frame, each starting on
/// a new line:
///
/// ```text
/// <function>
///     <file>:<line>
/// ```
///
/// If no frames were captured, only the call-site location is written.
pub struct Stack {
    location: &'static Location<'static>,
    frames: Frames,
}

impl Stack {
    /// Capture the stack at the position of the caller.
    ///
    /// `skip` is the number of additional frames above the caller to exclude,
    /// so a constructor that captures on behalf of its own caller passes `1`.
    ///
    /// Capturing never fails. If the platform can't walk the stack the result
    /// simply has no frames.
    ///
    /// # Example
    ///
    /// ```
    /// let stack = errwrap::Stack::capture(0);
    /// assert_eq!(stack.location().line(), line!() - 1);
    /// ```
    #[must_use]
    #[track_caller]
    #[inline(never)]
    pub fn capture(skip: usize) -> Self {
        Self {
            location: Location::caller(),
            frames: Frames::capture(skip),
        }
    }

    /// The source location of the call that captured this stack.
    pub fn location(&self) -> &'static Location<'static> {
        self.location
    }

    /// Returns the number of frames captured.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Returns `true` if no frames were captured.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The captured frames, resolved to their symbols.
    ///
    /// The first call resolves the symbols, which is comparatively expensive.
    #[cfg(feature = "full-backtrace")]
    #[cfg_attr(docsrs, doc(cfg(feature = "full-backtrace")))]
    pub fn frames(&self) -> &[BacktraceFrame] {
        self.frames.resolved()
    }

    /// Writes the stack to a writer in the format described on [`Stack`].
    ///
    /// # Errors
    ///
    /// Returns a [`fmt::Error`] if failed to write to the writer.
    pub fn write(&self, w: &mut dyn fmt::Write) -> fmt::Result {
        if self.is_empty() {
            write!(w, "\n\t{}", self.location)
        } else {
            self.frames.write(w)
        }
    }
}

impl fmt::Display for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write(f)
    }
}

impl fmt::Debug for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack")
            .field("location", &self.location)
            .field("frames", &self.len())
            .finish()
    }
}

///////////////////////////////////////////////////////////////////////////////
// Frames

#[cfg(feature = "full-backtrace")]
struct Frames {
    unresolved: Vec<BacktraceFrame>,
    resolved: OnceLock<Vec<BacktraceFrame>>,
}

#[cfg(feature = "full-backtrace")]
impl Frames {
    /// `Frames::capture` and `Stack::capture`.
    const CAPTURER_FRAMES: usize = 2;

    #[inline(never)]
    fn capture(skip: usize) -> Self {
        let capture: fn(usize) -> Self = Self::capture;
        let marker = capture as usize;
        let frames: Vec<BacktraceFrame> = Backtrace::new_unresolved().into();
        // Frames are trimmed relative to our own frame, as the number of
        // frames the unwinder adds on top of it differs between platforms.
        let start = if let Some(index) = frames
            .iter()
            .position(|frame| frame.symbol_address() as usize == marker)
        {
            index + Self::CAPTURER_FRAMES + skip
        } else {
            #[cfg(feature = "log")]
            log::trace!(
                "capturer frame not found in {} frames, keeping them untrimmed",
                frames.len()
            );
            0
        };
        Self {
            unresolved: frames.into_iter().skip(start).take(MAX_DEPTH).collect(),
            resolved: OnceLock::new(),
        }
    }

    fn len(&self) -> usize {
        self.unresolved.len()
    }

    fn resolved(&self) -> &[BacktraceFrame] {
        self.resolved.get_or_init(|| {
            let mut backtrace = Backtrace::from(self.unresolved.clone());
            backtrace.resolve();
            backtrace.into()
        })
    }

    fn write(&self, w: &mut dyn fmt::Write) -> fmt::Result {
        for frame in self.resolved() {
            let symbols = frame.symbols();
            if symbols.is_empty() {
                write!(w, "\n<unknown>\n\t{:?}", frame.ip())?;
            }
            for symbol in symbols {
                match symbol.name() {
                    Some(name) => write!(w, "\n{:#}", name)?,
                    None => w.write_str("\n<unknown>")?,
                }
                match (symbol.filename(), symbol.lineno()) {
                    (Some(file), Some(line)) => write!(w, "\n\t{}:{}", file.display(), line)?,
                    (Some(file), None) => write!(w, "\n\t{}", file.display())?,
                    (None, _) => write!(w, "\n\t{:?}", frame.ip())?,
                }
            }
        }
        Ok(())
    }
}

#[cfg(not(feature = "full-backtrace"))]
struct Frames;

#[cfg(not(feature = "full-backtrace"))]
#[allow(clippy::unused_self)]
impl Frames {
    fn capture(_skip: usize) -> Self {
        Self
    }

    fn len(&self) -> usize {
        0
    }

    fn write(&self, _w: &mut dyn fmt::Write) -> fmt::Result {
        Ok(())
    }
}
