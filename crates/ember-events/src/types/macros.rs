/// Declarative macro generating [`EventCategory`](super::EventCategory), the
/// named [`EventType`](super::EventType) constants, `ALL_NAMED_KINDS`,
/// `ALL_CATEGORIES` and the symbolic-name lookup from a single table.
///
/// # Shape
///
/// ```text
/// Category => "Label" [lo ..= hi] {
///     CONST_NAME => "Name" = 0x...,
/// }
/// ```
///
/// Every category is a disjoint inclusive range of raw values. A duplicated
/// raw value produces an unreachable-pattern warning in the generated
/// `symbolic_name` match, which is how aliasing is kept out of the table.
macro_rules! define_kinds {
    (
        $(
            $(#[doc = $cdoc:literal])*
            $category:ident => $label:literal [$lo:literal ..= $hi:literal] {
                $(
                    $(#[doc = $doc:literal])*
                    $konst:ident => $name:literal = $value:literal
                ),* $(,)?
            }
        )*
    ) => {
        // ── EventCategory enum ──────────────────────────────────────

        /// Contiguous sub-range of the kind space.
        ///
        /// Categories never overlap; a kind belongs to at most one.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum EventCategory {
            $(
                $(#[doc = $cdoc])*
                $category,
            )*
        }

        /// All categories in ascending range order.
        pub const ALL_CATEGORIES: [EventCategory; { [$($label,)*].len() }] = [
            $(EventCategory::$category,)*
        ];

        impl EventCategory {
            /// Inclusive raw range covered by this category.
            #[must_use]
            pub const fn range(self) -> std::ops::RangeInclusive<u32> {
                match self {
                    $(Self::$category => $lo..=$hi,)*
                }
            }

            /// Label used as the prefix of symbolic kind names.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$category => $label,)*
                }
            }

            /// Category containing `kind`, if any.
            #[must_use]
            pub fn of(kind: EventType) -> Option<Self> {
                let raw = kind.raw();
                $(
                    if ($lo..=$hi).contains(&raw) {
                        return Some(Self::$category);
                    }
                )*
                None
            }

            /// Whether `kind` falls inside this category's range.
            #[must_use]
            pub fn contains(self, kind: EventType) -> bool {
                self.range().contains(&kind.raw())
            }
        }

        impl std::fmt::Display for EventCategory {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        // ── Named kinds ─────────────────────────────────────────────

        impl EventType {
            $($(
                $(#[doc = $doc])*
                pub const $konst: Self = Self::from_raw($value);
            )*)*

            /// `"Category.Name"` for registered kinds.
            pub(crate) fn symbolic_name(self) -> Option<&'static str> {
                match self.raw() {
                    $($($value => Some(concat!($label, ".", $name)),)*)*
                    _ => None,
                }
            }
        }

        /// Every named kind in table order.
        pub const ALL_NAMED_KINDS: [EventType; { [$($($value,)*)*].len() }] = [
            $($(EventType::$konst,)*)*
        ];
    };
}
