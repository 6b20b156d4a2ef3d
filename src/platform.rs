use crate::sha256_utils;

#[allow(dead_code)]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Platform {
    Portable,
    #[cfg(feature = "asm")]
    Asm,
}

/// A particular compression backend.
///
/// `detect` probes once for the fastest backend the build and target
/// support; a failed probe falls back to the portable implementation and is
/// never surfaced to the caller. Every backend produces bit-identical state
/// transitions.
#[derive(Clone, Copy, Debug)]
pub struct Implementation(Platform);

impl Implementation {
    pub fn detect() -> Self {
        #[cfg(feature = "asm")]
        {
            if let Some(asm_impl) = Self::asm_if_supported() {
                return asm_impl;
            }
        }

        Self::portable()
    }

    pub fn portable() -> Self {
        Implementation(Platform::Portable)
    }

    #[cfg(feature = "asm")]
    pub fn asm_if_supported() -> Option<Self> {
        #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
        {
            Some(Implementation(Platform::Asm))
        }
        #[cfg(not(any(target_arch = "x86", target_arch = "x86_64")))]
        {
            log::warn!("asm backend not supported on this target, falling back to portable");
            None
        }
    }

    #[inline]
    pub fn compress256(self, state: &mut [u32; 8], block: &[u8; 64]) {
        match self.0 {
            Platform::Portable => sha256_utils::compress256(state, block),
            #[cfg(feature = "asm")]
            Platform::Asm => sha2_asm::compress256(state, core::slice::from_ref(block)),
        }
    }
}
