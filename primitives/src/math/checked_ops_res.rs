// Copyright 2025 Forecasting Technologies LTD.
//
// This file is part of Sentinel.
//
// Sentinel is free software: you can redistribute it and/or modify it
// under the terms of the GNU General Public License as published by the
// Free Software Foundation, either version 3 of the License, or (at
// your option) any later version.
//
// Sentinel is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with Sentinel. If not, see <https://www.gnu.org/licenses/>.

use sp_arithmetic::{
    traits::{CheckedAdd, CheckedSub},
    ArithmeticError,
};
use sp_runtime::DispatchError;

/// Checked addition which reports an overflow as a `DispatchError`.
pub trait CheckedAddRes
where
    Self: Sized,
{
    fn checked_add_res(&self, other: &Self) -> Result<Self, DispatchError>;
}

/// Checked subtraction which reports an underflow as a `DispatchError`.
pub trait CheckedSubRes
where
    Self: Sized,
{
    fn checked_sub_res(&self, other: &Self) -> Result<Self, DispatchError>;
}

/// Increments a counter in place, failing on overflow. Used for round and vote counters.
pub trait CheckedIncRes
where
    Self: Sized,
{
    fn checked_inc_res(&mut self) -> Result<Self, DispatchError>;
}

impl<T> CheckedAddRes for T
where
    T: CheckedAdd,
{
    #[inline]
    fn checked_add_res(&self, other: &Self) -> Result<Self, DispatchError> {
        self.checked_add(other).ok_or(DispatchError::Arithmetic(ArithmeticError::Overflow))
    }
}

impl<T> CheckedSubRes for T
where
    T: CheckedSub,
{
    #[inline]
    fn checked_sub_res(&self, other: &Self) -> Result<Self, DispatchError> {
        self.checked_sub(other).ok_or(DispatchError::Arithmetic(ArithmeticError::Underflow))
    }
}

impl<T> CheckedIncRes for T
where
    T: CheckedAdd + From<u8> + Copy,
{
    #[inline]
    fn checked_inc_res(&mut self) -> Result<Self, DispatchError> {
        *self = self.checked_add_res(&T::from(1u8))?;
        Ok(*self)
    }
}
