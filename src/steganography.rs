use image::RgbImage;
use thiserror::Error;

use crate::constants::DELIMITER;

#[derive(Debug, Error)]
pub enum StegoError {
    #[error(
        "Not enough space in the image to hide the message. Required: {required} bits, Available: {available} bits"
    )]
    NotEnoughSpace { required: usize, available: usize },

    #[error("The character {0:?} does not fit into a single byte and cannot be hidden")]
    UnsupportedCharacter(char),
}

pub fn text_to_bits(text: &str) -> Result<Vec<u8>, StegoError> {
    let mut bits = Vec::with_capacity(text.len() * 8);

    for ch in text.chars() {
        let code = u32::from(ch);
        if code > 0xFF {
            return Err(StegoError::UnsupportedCharacter(ch));
        }

        bits.extend((0..8).rev().map(|shift| ((code >> shift) & 1) as u8));
    }

    Ok(bits)
}

pub fn bits_to_text(bits: &[u8]) -> String {
    bits.chunks_exact(8)
        .map(|byte| byte.iter().fold(0u8, |acc, &bit| (acc << 1) | bit))
        .map(char::from)
        .collect()
}

pub fn embed(image: &mut RgbImage, message: &str) -> Result<(), StegoError> {
    let bits = text_to_bits(&format!("{message}{DELIMITER}"))?;

    let available = image.as_raw().len();
    if bits.len() > available {
        return Err(StegoError::NotEnoughSpace {
            required: bits.len(),
            available,
        });
    }

    // 像素按行主序排列，每个像素依次给出 R、G、B 三个通道。
    for (channel, bit) in image.iter_mut().zip(bits) {
        *channel = (*channel & !1) | bit;
    }

    Ok(())
}

pub fn extract(image: &RgbImage) -> Option<String> {
    let mut message = String::new();
    let mut byte = 0u8;
    let mut filled = 0;

    for channel in image.as_raw() {
        byte = (byte << 1) | (channel & 1);
        filled += 1;

        if filled < 8 {
            continue;
        }

        message.push(char::from(byte));
        byte = 0;
        filled = 0;

        if message.ends_with(DELIMITER) {
            message.truncate(message.len() - DELIMITER.len());
            return Some(message);
        }
    }

    None
}
