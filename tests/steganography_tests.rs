use image::{Rgb, RgbImage};
use rand::RngCore;
use secretpixel::constants::DELIMITER;
use secretpixel::steganography::{StegoError, bits_to_text, embed, extract, text_to_bits};

/// 一个辅助函数，用于创建一个带有随机像素的 RGB 图像
fn random_image(width: u32, height: u32) -> RgbImage {
    let mut raw = vec![0u8; (width * height * 3) as usize];
    rand::rng().fill_bytes(&mut raw);

    RgbImage::from_raw(width, height, raw).expect("Failed to create test image.")
}

/// 验证文本到比特流的转换按高位在前的顺序输出
#[test]
fn test_text_to_bits_msb_first() {
    // 'A' = 0x41 = 01000001
    let bits = text_to_bits("A").expect("'A' should convert.");
    assert_eq!(bits, vec![0, 1, 0, 0, 0, 0, 0, 1]);
}

/// 验证比特流到文本的转换是文本转换的逆运算，且丢弃不足 8 位的尾部
#[test]
fn test_bits_to_text_inverse_and_trailing_group() {
    let bits = text_to_bits("Hello").expect("ASCII should convert.");
    assert_eq!(bits_to_text(&bits), "Hello");

    // 追加 7 个比特，不足一个字节，应被丢弃
    let mut padded = bits.clone();
    padded.extend([1, 0, 1, 1, 0, 0, 1]);
    assert_eq!(bits_to_text(&padded), "Hello");
}

/// 验证超出单字节范围的字符被显式拒绝
#[test]
fn test_reject_characters_above_single_byte() {
    let result = text_to_bits("秘密");
    assert!(matches!(
        result,
        Err(StegoError::UnsupportedCharacter('秘'))
    ));

    // Latin-1 范围内的字符可以正常转换
    assert!(text_to_bits("café").is_ok());
}

/// 验证具体场景：10x10 全黑图像隐藏 "hi"，只有前 56 个通道可能被改写
#[test]
fn test_black_image_scenario() {
    let mut image = RgbImage::from_pixel(10, 10, Rgb([0, 0, 0]));
    embed(&mut image, "hi").expect("56 bits must fit into 300 slots.");

    let expected_bits =
        text_to_bits(&format!("hi{DELIMITER}")).expect("The payload should convert.");
    assert_eq!(expected_bits.len(), 56);

    // 前 56 个通道的 LSB 等于载荷比特，其余通道保持全黑
    for (index, &channel) in image.as_raw().iter().enumerate() {
        if index < expected_bits.len() {
            assert_eq!(
                channel & 1,
                expected_bits[index],
                "LSB mismatch at channel {index}."
            );
            assert_eq!(
                channel & !1,
                0,
                "Upper bits must stay zero at channel {index}."
            );
        } else {
            assert_eq!(
                channel, 0,
                "Channel {index} beyond the payload must stay untouched."
            );
        }
    }

    assert_eq!(
        extract(&image).as_deref(),
        Some("hi"),
        "Extraction must return the embedded message."
    );
}

/// 验证载荷之后的通道与输入逐比特一致
#[test]
fn test_channels_beyond_cursor_untouched() {
    let original = random_image(16, 16);
    let mut modified = original.clone();
    embed(&mut modified, "short").expect("The message must fit.");

    let payload_bits = ("short".len() + DELIMITER.len()) * 8;
    assert_eq!(
        original.as_raw()[payload_bits..],
        modified.as_raw()[payload_bits..],
        "Channels beyond the payload must be bit-identical."
    );
}

/// 验证容量边界：恰好填满成功，多一个字符则失败且图像不被修改
#[test]
fn test_capacity_boundary() {
    // 4x4 图像共 48 个通道；"a" 加上分隔符正好 48 比特
    let mut image = RgbImage::from_pixel(4, 4, Rgb([10, 20, 30]));
    embed(&mut image, "a").expect("An exact fit must succeed.");
    assert_eq!(extract(&image).as_deref(), Some("a"));

    // "ab" 需要 56 比特，超出容量，必须失败
    let original = RgbImage::from_pixel(4, 4, Rgb([10, 20, 30]));
    let mut rejected = original.clone();
    match embed(&mut rejected, "ab") {
        Err(StegoError::NotEnoughSpace {
            required,
            available,
        }) => {
            assert_eq!(required, 56);
            assert_eq!(available, 48);
        }
        other => panic!("Expected NotEnoughSpace, got {other:?}."),
    }

    // 失败时图像必须保持原样
    assert_eq!(
        original.as_raw(),
        rejected.as_raw(),
        "A failed embed must not modify the image."
    );
}

/// 验证空信息只嵌入分隔符并能往返
#[test]
fn test_empty_message_round_trip() {
    let mut image = random_image(8, 8);
    embed(&mut image, "").expect("The delimiter alone must fit.");
    assert_eq!(extract(&image).as_deref(), Some(""));
}

/// 验证信息本身包含分隔符时，提取在首次出现处截断
#[test]
fn test_delimiter_collision_truncates() {
    let mut image = random_image(32, 32);
    embed(&mut image, "before#####after").expect("The message must fit.");

    assert_eq!(
        extract(&image).as_deref(),
        Some("before"),
        "Extraction must stop at the first delimiter occurrence."
    );
}

/// 验证从未隐写过的全黑图像中提取不到信息
#[test]
fn test_extract_from_untouched_image() {
    let image = RgbImage::from_pixel(10, 10, Rgb([0, 0, 0]));
    assert_eq!(
        extract(&image),
        None,
        "An untouched image must yield no message."
    );
}
