/// Call the target macro once for every arity from `0` up to `N`.
///
/// The number cannot exceed `12`.
///
/// # Example
///
/// ```ignore
/// range_invoke!(my_macro, 3: P);
/// // eq  to ↓
/// my_macro!(0: []);
/// my_macro!(1: [0: P0]);
/// my_macro!(2: [0: P0, 1: P1]);
/// my_macro!(3: [0: P0, 1: P1, 2: P2]);
/// ```
///
/// Outer attributes are repeated on every call.
///
/// ```
/// use pg_utils::range_invoke;
///
/// trait Arity {
///     const ARITY: usize;
/// }
///
/// macro_rules! impl_arity {
///     ($num:literal : [$($index:tt : $name:ident),*]) => {
///         impl<$($name),*> Arity for ($($name,)*) {
///             const ARITY: usize = $num;
///         }
///     };
/// }
///
/// range_invoke!(impl_arity, 3: P);
///
/// assert_eq!(<() as Arity>::ARITY, 0);
/// assert_eq!(<(u8,) as Arity>::ARITY, 1);
/// assert_eq!(<(u8, u8, u8) as Arity>::ARITY, 3);
/// ```
#[macro_export]
macro_rules! range_invoke {
    ($(#[$meta:meta])* $macro:ident, 0: P) => {
        $(#[$meta])* $macro!(0: []);
    };
    ($(#[$meta:meta])* $macro:ident, 1: P) => {
        $crate::range_invoke!($(#[$meta])* $macro, 0: P);
        $(#[$meta])* $macro!(1: [0: P0]);
    };
    ($(#[$meta:meta])* $macro:ident, 2: P) => {
        $crate::range_invoke!($(#[$meta])* $macro, 1: P);
        $(#[$meta])* $macro!(2: [0: P0, 1: P1]);
    };
    ($(#[$meta:meta])* $macro:ident, 3: P) => {
        $crate::range_invoke!($(#[$meta])* $macro, 2: P);
        $(#[$meta])* $macro!(3: [0: P0, 1: P1, 2: P2]);
    };
    ($(#[$meta:meta])* $macro:ident, 4: P) => {
        $crate::range_invoke!($(#[$meta])* $macro, 3: P);
        $(#[$meta])* $macro!(4: [0: P0, 1: P1, 2: P2, 3: P3]);
    };
    ($(#[$meta:meta])* $macro:ident, 5: P) => {
        $crate::range_invoke!($(#[$meta])* $macro, 4: P);
        $(#[$meta])* $macro!(5: [0: P0, 1: P1, 2: P2, 3: P3, 4: P4]);
    };
    ($(#[$meta:meta])* $macro:ident, 6: P) => {
        $crate::range_invoke!($(#[$meta])* $macro, 5: P);
        $(#[$meta])* $macro!(6: [0: P0, 1: P1, 2: P2, 3: P3, 4: P4, 5: P5]);
    };
    ($(#[$meta:meta])* $macro:ident, 7: P) => {
        $crate::range_invoke!($(#[$meta])* $macro, 6: P);
        $(#[$meta])* $macro!(7: [0: P0, 1: P1, 2: P2, 3: P3, 4: P4, 5: P5, 6: P6]);
    };
    ($(#[$meta:meta])* $macro:ident, 8: P) => {
        $crate::range_invoke!($(#[$meta])* $macro, 7: P);
        $(#[$meta])* $macro!(8: [0: P0, 1: P1, 2: P2, 3: P3, 4: P4, 5: P5, 6: P6, 7: P7]);
    };
    ($(#[$meta:meta])* $macro:ident, 9: P) => {
        $crate::range_invoke!($(#[$meta])* $macro, 8: P);
        $(#[$meta])* $macro!(9: [0: P0, 1: P1, 2: P2, 3: P3, 4: P4, 5: P5, 6: P6, 7: P7, 8: P8]);
    };
    ($(#[$meta:meta])* $macro:ident, 10: P) => {
        $crate::range_invoke!($(#[$meta])* $macro, 9: P);
        $(#[$meta])* $macro!(10: [0: P0, 1: P1, 2: P2, 3: P3, 4: P4, 5: P5, 6: P6, 7: P7, 8: P8, 9: P9]);
    };
    ($(#[$meta:meta])* $macro:ident, 11: P) => {
        $crate::range_invoke!($(#[$meta])* $macro, 10: P);
        $(#[$meta])* $macro!(11: [0: P0, 1: P1, 2: P2, 3: P3, 4: P4, 5: P5, 6: P6, 7: P7, 8: P8, 9: P9, 10: P10]);
    };
    ($(#[$meta:meta])* $macro:ident, 12: P) => {
        $crate::range_invoke!($(#[$meta])* $macro, 11: P);
        $(#[$meta])* $macro!(12: [0: P0, 1: P1, 2: P2, 3: P3, 4: P4, 5: P5, 6: P6, 7: P7, 8: P8, 9: P9, 10: P10, 11: P11]);
    };
}
