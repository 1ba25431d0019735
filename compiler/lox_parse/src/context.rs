//! Syntactic context for the static checks the parser performs.

/// Context flags for parsing.
///
/// Tracks which enclosing constructs make `break`, `return`, `this` and
/// `super` legal. Multiple flags can be combined.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParseContext(u8);

impl ParseContext {
    /// Top-level code.
    pub const NONE: Self = Self(0);

    /// Inside a loop body. Makes `break` valid.
    pub const IN_LOOP: Self = Self(1 << 0);

    /// Inside a function, method or getter body. Makes `return` valid.
    pub const IN_FUNCTION: Self = Self(1 << 1);

    /// Inside a class body. Makes `this` valid.
    pub const IN_CLASS: Self = Self(1 << 2);

    /// Inside a class that has a superclass. Makes `super` valid.
    pub const IN_SUBCLASS: Self = Self(1 << 3);

    #[inline]
    pub const fn has(self, flag: Self) -> bool {
        (self.0 & flag.0) != 0
    }

    #[inline]
    #[must_use]
    pub const fn with(self, flag: Self) -> Self {
        Self(self.0 | flag.0)
    }

    #[inline]
    #[must_use]
    pub const fn without(self, flag: Self) -> Self {
        Self(self.0 & !flag.0)
    }

    /// Context for a function body: `return` becomes legal and loops of
    /// the enclosing code no longer count.
    #[inline]
    #[must_use]
    pub const fn enter_function(self) -> Self {
        self.without(Self::IN_LOOP).with(Self::IN_FUNCTION)
    }

    /// Context for a class body. A nested class without a superclass must
    /// not inherit the outer class's `super`.
    #[inline]
    #[must_use]
    pub const fn enter_class(self, has_superclass: bool) -> Self {
        let ctx = self.without(Self::IN_SUBCLASS).with(Self::IN_CLASS);
        if has_superclass {
            ctx.with(Self::IN_SUBCLASS)
        } else {
            ctx
        }
    }

    #[inline]
    pub const fn in_loop(self) -> bool {
        self.has(Self::IN_LOOP)
    }

    #[inline]
    pub const fn in_function(self) -> bool {
        self.has(Self::IN_FUNCTION)
    }

    #[inline]
    pub const fn in_class(self) -> bool {
        self.has(Self::IN_CLASS)
    }

    #[inline]
    pub const fn in_subclass(self) -> bool {
        self.has(Self::IN_SUBCLASS)
    }
}

#[cfg(test)]
mod tests;
