//! Operator fan-out for the field, scalar and group types
//!
//! Each type implements its operators once on references (`&a + &b`); these
//! macros derive the owned, mixed and compound-assignment forms from that.

macro_rules! impl_binop {
    ($trait:ident, $method:ident, $lhs:ty, $rhs:ty, $output:ty) => {
        impl<'b> core::ops::$trait<&'b $rhs> for $lhs {
            type Output = $output;

            #[inline]
            fn $method(self, rhs: &'b $rhs) -> $output {
                core::ops::$trait::$method(&self, rhs)
            }
        }

        impl<'a> core::ops::$trait<$rhs> for &'a $lhs {
            type Output = $output;

            #[inline]
            fn $method(self, rhs: $rhs) -> $output {
                core::ops::$trait::$method(self, &rhs)
            }
        }

        impl core::ops::$trait<$rhs> for $lhs {
            type Output = $output;

            #[inline]
            fn $method(self, rhs: $rhs) -> $output {
                core::ops::$trait::$method(&self, &rhs)
            }
        }
    };
}

macro_rules! impl_assign_op {
    ($assign:ident, $assign_method:ident, $op:ident, $op_method:ident, $lhs:ty, $rhs:ty) => {
        impl core::ops::$assign<$rhs> for $lhs {
            #[inline]
            fn $assign_method(&mut self, rhs: $rhs) {
                *self = core::ops::$op::$op_method(&*self, &rhs);
            }
        }

        impl<'b> core::ops::$assign<&'b $rhs> for $lhs {
            #[inline]
            fn $assign_method(&mut self, rhs: &'b $rhs) {
                *self = core::ops::$op::$op_method(&*self, rhs);
            }
        }
    };
}

/// `Add`, `Sub` and their assign forms, given `&T + &R` and `&T - &R`
macro_rules! impl_additive_ops {
    ($t:ty) => {
        impl_additive_ops!($t, $t);
    };
    ($lhs:ty, $rhs:ty) => {
        impl_binop!(Add, add, $lhs, $rhs, $lhs);
        impl_binop!(Sub, sub, $lhs, $rhs, $lhs);
        impl_assign_op!(AddAssign, add_assign, Add, add, $lhs, $rhs);
        impl_assign_op!(SubAssign, sub_assign, Sub, sub, $lhs, $rhs);
    };
}

/// `Mul` (and `MulAssign` when the output is the left-hand type), given `&T * &R`
macro_rules! impl_multiplicative_ops {
    ($t:ty) => {
        impl_multiplicative_ops!($t, $t);
    };
    ($lhs:ty, $rhs:ty) => {
        impl_binop!(Mul, mul, $lhs, $rhs, $lhs);
        impl_assign_op!(MulAssign, mul_assign, Mul, mul, $lhs, $rhs);
    };
    ($lhs:ty, $rhs:ty, $output:ty) => {
        impl_binop!(Mul, mul, $lhs, $rhs, $output);
    };
}

/// Owned `Neg`, given `-&T`
macro_rules! impl_owned_neg {
    ($t:ty) => {
        impl core::ops::Neg for $t {
            type Output = $t;

            #[inline]
            fn neg(self) -> $t {
                -&self
            }
        }
    };
}
