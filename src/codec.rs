/*
 * Stroke-template gesture matcher (rust version)
 *
 * This software is distributed under the "New BSD License" agreement:
 *
 * Copyright (c) 2025, Ferran Pujol Camins. All rights reserved.
 *
 * Redistribution and use in source and binary forms, with or without
 * modification, are permitted provided that the following conditions are met:
 *    * Redistributions of source code must retain the above copyright
 *      notice, this list of conditions and the following disclaimer.
 *    * Redistributions in binary form must reproduce the above copyright
 *      notice, this list of conditions and the following disclaimer in the
 *      documentation and/or other materials provided with the distribution.
 *    * Neither the name of the copyright holder nor the names of its
 *      contributors may be used to endorse or promote products derived from
 *      this software without specific prior written permission.
 *
 * THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS
 * IS" AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO,
 * THE IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR
 * PURPOSE ARE DISCLAIMED. IN NO EVENT SHALL Ferran Pujol Camins BE LIABLE FOR
 * ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT
 * LIABILITY, OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY
 * OUT OF THE USE OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF
 * SUCH DAMAGE.
**/

//! Compact, copy-pasteable gesture tokens.
//!
//! A token is the bincode encoding of a [`Gesture`], zlib-compressed and then
//! base64 encoded (standard alphabet, padded). Tokens are only meant to be
//! read back by this crate.

use crate::{
    error::Result,
    gesture::Gesture,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use flate2::{read::ZlibDecoder, write::ZlibEncoder, Compression};
use std::io::{Read, Write};

/// Upper bound on the inflated payload of a token.
const MAX_PAYLOAD: u64 = 16 * 1024 * 1024;

/// Serializes, compresses and encodes a gesture.
///
/// # Errors
///
/// Fails if serialization or compression fails.
pub fn encode(gesture: &Gesture, compression_level: u32) -> Result<String> {
    let raw = bincode::serialize(gesture)?;
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::new(compression_level));
    encoder.write_all(&raw)?;
    let compressed = encoder.finish()?;
    Ok(STANDARD.encode(compressed))
}

/// Exact inverse of [`encode`].
///
/// # Errors
///
/// Fails if the token is not base64, does not inflate, or does not hold a
/// gesture.
pub fn decode(token: &str) -> Result<Gesture> {
    let compressed = STANDARD.decode(token.trim())?;
    let mut raw = Vec::new();
    ZlibDecoder::new(compressed.as_slice())
        .take(MAX_PAYLOAD)
        .read_to_end(&mut raw)?;
    Ok(bincode::deserialize(&raw)?)
}
