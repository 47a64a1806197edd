use std::fmt;

#[derive(thiserror::Error, Debug, PartialEq)]
#[error("invalid binary digit")]
pub struct BitArrayError;

/// Fixed-width sequence of binary digits, most significant bit first
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BitArray(Vec<bool>);

impl BitArray {
    /// Unpacks the first `width` bits of `bytes`.
    /// Missing bits are zeros.
    pub fn from_bytes(bytes: &[u8], width: usize) -> Self {
        let bits = (0..width)
            .map(|index| {
                bytes.get(index / 8)
                    .map(|byte| byte & (0x80 >> (index % 8)) != 0)
                    .unwrap_or(false)
            })
            .collect();
        Self(bits)
    }

    pub fn from_binary_str(value: &str) -> Result<Self, BitArrayError> {
        let bits = value.chars()
            .map(|digit| match digit {
                '0' => Ok(false),
                '1' => Ok(true),
                _ => Err(BitArrayError),
            })
            .collect::<Result<_, _>>()?;
        Ok(Self(bits))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `false` for indices past the end
    pub fn is_set(&self, index: usize) -> bool {
        self.0.get(index).copied().unwrap_or(false)
    }
}

impl fmt::Display for BitArray {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.0.iter() {
            write!(formatter, "{}", if *bit { '1' } else { '0' })?;
        };
        Ok(())
    }
}
