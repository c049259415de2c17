use pinocchio::{program_error::ProgramError, pubkey::Pubkey};

/// Little-endian cursor over instruction payloads and account data.
///
/// Every read fails with `InvalidInstructionData` when the buffer runs out;
/// state decoders remap that to `InvalidAccountData`.
pub struct ByteReader<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> ByteReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, offset: 0 }
    }

    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8], ProgramError> {
        let end = self
            .offset
            .checked_add(len)
            .ok_or(ProgramError::InvalidInstructionData)?;
        let bytes = self
            .data
            .get(self.offset..end)
            .ok_or(ProgramError::InvalidInstructionData)?;
        self.offset = end;
        Ok(bytes)
    }

    fn read_array<const N: usize>(&mut self) -> Result<[u8; N], ProgramError> {
        let mut buf = [0u8; N];
        buf.copy_from_slice(self.read_bytes(N)?);
        Ok(buf)
    }

    pub fn read_u8(&mut self) -> Result<u8, ProgramError> {
        Ok(self.read_array::<1>()?[0])
    }

    pub fn read_u32(&mut self) -> Result<u32, ProgramError> {
        Ok(u32::from_le_bytes(self.read_array()?))
    }

    pub fn read_u64(&mut self) -> Result<u64, ProgramError> {
        Ok(u64::from_le_bytes(self.read_array()?))
    }

    pub fn read_i64(&mut self) -> Result<i64, ProgramError> {
        Ok(i64::from_le_bytes(self.read_array()?))
    }

    pub fn read_pubkey(&mut self) -> Result<Pubkey, ProgramError> {
        self.read_array()
    }

    /// Tag byte, then the value only when the tag is 1.
    pub fn read_option_i64(&mut self) -> Result<Option<i64>, ProgramError> {
        match self.read_u8()? {
            0 => Ok(None),
            1 => Ok(Some(self.read_i64()?)),
            _ => Err(ProgramError::InvalidInstructionData),
        }
    }

    pub fn read_option_u32(&mut self) -> Result<Option<u32>, ProgramError> {
        match self.read_u8()? {
            0 => Ok(None),
            1 => Ok(Some(self.read_u32()?)),
            _ => Err(ProgramError::InvalidInstructionData),
        }
    }

    /// Tag byte followed by a value slot that is always present (zeroed when None).
    pub fn read_fixed_option_i64(&mut self) -> Result<Option<i64>, ProgramError> {
        let tag = self.read_u8()?;
        let value = self.read_i64()?;
        match tag {
            0 => Ok(None),
            1 => Ok(Some(value)),
            _ => Err(ProgramError::InvalidInstructionData),
        }
    }

    pub fn read_fixed_option_u32(&mut self) -> Result<Option<u32>, ProgramError> {
        let tag = self.read_u8()?;
        let value = self.read_u32()?;
        match tag {
            0 => Ok(None),
            1 => Ok(Some(value)),
            _ => Err(ProgramError::InvalidInstructionData),
        }
    }

    /// Payloads must be consumed exactly.
    pub fn finish(self) -> Result<(), ProgramError> {
        if self.offset != self.data.len() {
            return Err(ProgramError::InvalidInstructionData);
        }
        Ok(())
    }
}

/// Little-endian writer into a pre-sized account buffer.
pub struct ByteWriter<'a> {
    data: &'a mut [u8],
    offset: usize,
}

impl<'a> ByteWriter<'a> {
    pub fn new(data: &'a mut [u8]) -> Self {
        Self { data, offset: 0 }
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), ProgramError> {
        let end = self
            .offset
            .checked_add(bytes.len())
            .ok_or(ProgramError::AccountDataTooSmall)?;
        self.data
            .get_mut(self.offset..end)
            .ok_or(ProgramError::AccountDataTooSmall)?
            .copy_from_slice(bytes);
        self.offset = end;
        Ok(())
    }

    pub fn write_u8(&mut self, value: u8) -> Result<(), ProgramError> {
        self.write_bytes(&[value])
    }

    pub fn write_u32(&mut self, value: u32) -> Result<(), ProgramError> {
        self.write_bytes(&value.to_le_bytes())
    }

    pub fn write_u64(&mut self, value: u64) -> Result<(), ProgramError> {
        self.write_bytes(&value.to_le_bytes())
    }

    pub fn write_i64(&mut self, value: i64) -> Result<(), ProgramError> {
        self.write_bytes(&value.to_le_bytes())
    }

    pub fn write_fixed_option_i64(&mut self, value: Option<i64>) -> Result<(), ProgramError> {
        self.write_u8(value.is_some() as u8)?;
        self.write_i64(value.unwrap_or_default())
    }

    pub fn write_fixed_option_u32(&mut self, value: Option<u32>) -> Result<(), ProgramError> {
        self.write_u8(value.is_some() as u8)?;
        self.write_u32(value.unwrap_or_default())
    }
}
