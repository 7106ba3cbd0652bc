//! # Txpack
//!
//! Tag-length-value framing for transaction payloads.
//!
//! Every value on the wire announces its own shape with a leading tag byte, so a
//! reader can check a value against what it expected, or skip it without knowing
//! what it was.
//!
//! ## Format
//!
//! - **Flags**: `[Tag: 1b]` (`BoolTrue`, `BoolFalse`, `Unit`, `Pad`)
//! - **Scalars**: `[Tag: 1b][Data: N]` (`U64` is 8 bytes, `Address` is [`ADDRESS_LEN`] bytes)
//! - **Blobs**: `[Tag: 1b][Len: 4b][Data: Len]` (`String`, `Bytes`)
//! - **Containers**: `[Tag: 1b][Len: 4b][Body: Len]` (`List`, `Map`, `Variant`)
//!
//! All integers are Little-Endian. A `Map` body holds only `Variant` entries; a
//! `Variant` body is a `String` name followed by exactly one payload item.


/// Width of an account address on the wire.
pub const ADDRESS_LEN: usize = 16;

/// Framing errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Byte is not a known `Tag`, or is a tag the reader did not expect.
    InvalidTag(u8),
    /// String data is not valid UTF-8.
    InvalidUtf8,
    /// Buffer exhausted while reading.
    UnexpectedEnd,
    /// Blob or container body exceeds `u32::MAX` bytes.
    BlobTooLarge(usize),
    /// Closing a scope that is not the innermost open scope.
    ScopeMismatch { expected: Scope, actual: Scope },
    /// Closing a scope when only the Root remains.
    ScopeUnderflow,
    /// Finalizing the buffer with scopes still open.
    ScopeStillOpen,
    /// A second payload was written into a `Variant`, or a view held more than it was read for.
    TooManyItems,
    /// A `Variant` was closed without a payload.
    EmptyVariant,
    /// A non-`Variant` item was written directly into a `Map`.
    InvalidMapEntry,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidTag(b) => write!(f, "invalid tag byte {:#04x}", b),
            Error::InvalidUtf8 => write!(f, "string is not valid utf-8"),
            Error::UnexpectedEnd => write!(f, "unexpected end of buffer"),
            Error::BlobTooLarge(len) => write!(f, "blob of {} bytes exceeds the u32 length limit", len),
            Error::ScopeMismatch { expected, actual } => {
                write!(f, "scope mismatch: expected {:?}, found {:?}", expected, actual)
            }
            Error::ScopeUnderflow => write!(f, "no open scope to close"),
            Error::ScopeStillOpen => write!(f, "scope still open"),
            Error::TooManyItems => write!(f, "more than one item where one was expected"),
            Error::EmptyVariant => write!(f, "variant closed without a payload"),
            Error::InvalidMapEntry => write!(f, "map entries must be variants"),
        }
    }
}

impl std::error::Error for Error {}

/// Specialized `Result` for framing operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Identifies the shape of the encoded value.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    /// Padding (Skip).
    Pad = 0x00,

    BoolTrue = 0x01,
    BoolFalse = 0x02,
    U64 = 0x06,
    Unit = 0x0E,
    Address = 0x0F,

    // Blobs (Tag + u32 Len + Bytes)
    String = 0x10,
    Bytes = 0x11,

    // Containers (Tag + u32 Len + Body)
    List = 0x20,
    Map = 0x21,
    Variant = 0x33,
}

impl Tag {
    /// Returns the Tag for a given byte, or `None` if unknown.
    pub const fn from_u8(b: u8) -> Option<Self> {
        match b {
            0x00 => Some(Tag::Pad),
            0x01 => Some(Tag::BoolTrue),
            0x02 => Some(Tag::BoolFalse),
            0x06 => Some(Tag::U64),
            0x0E => Some(Tag::Unit),
            0x0F => Some(Tag::Address),
            0x10 => Some(Tag::String),
            0x11 => Some(Tag::Bytes),
            0x20 => Some(Tag::List),
            0x21 => Some(Tag::Map),
            0x33 => Some(Tag::Variant),
            _ => None,
        }
    }

    /// Number of body bytes for fixed-width tags, `None` for length-prefixed ones.
    const fn fixed_width(self) -> Option<usize> {
        match self {
            Tag::Pad | Tag::BoolTrue | Tag::BoolFalse | Tag::Unit => Some(0),
            Tag::U64 => Some(8),
            Tag::Address => Some(ADDRESS_LEN),
            Tag::String | Tag::Bytes | Tag::List | Tag::Map | Tag::Variant => None,
        }
    }
}

/// Kind of an open container on the `Encoder` stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// The virtual root; allows any item.
    Root,
    /// Ordered sequence; allows any number of items.
    List,
    /// Strictly allows only `Tag::Variant` items.
    Map,
    /// Name, then exactly one payload item.
    Variant,
}

struct Frame {
    /// Offset of the first body byte; the length header sits just before it.
    start: usize,
    scope: Scope,
    count: usize,
}

/// A scope-checked encoder that back-patches container lengths on close.
///
/// # Structural Invariants
///
/// 1.  **Map Scopes**: Only `variant_begin()` may be used as a direct child.
/// 2.  **Variant Scopes**: Exactly one payload item after the name.
/// 3.  **Root Scope**: The encoder must be back at Root to hand out bytes.
pub struct Encoder {
    buf: Vec<u8>,
    /// Bottom is always `Scope::Root`.
    stack: Vec<Frame>,
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Encoder {
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(256),
            stack: vec![Frame { start: 0, scope: Scope::Root, count: 0 }],
        }
    }

    /// Consumes the encoder and returns the final bytes.
    ///
    /// # Errors
    /// Returns `Error::ScopeStillOpen` if any container is still open.
    pub fn into_bytes(self) -> Result<Vec<u8>> {
        if self.stack.len() > 1 {
            return Err(Error::ScopeStillOpen);
        }
        Ok(self.buf)
    }

    fn frame(&mut self) -> &mut Frame {
        let top = self.stack.len() - 1;
        &mut self.stack[top]
    }

    fn open_item(&mut self, tag: Tag) -> Result<()> {
        let frame = self.frame();
        match frame.scope {
            Scope::Root | Scope::List => {}
            Scope::Map if tag != Tag::Variant => return Err(Error::InvalidMapEntry),
            Scope::Map => {}
            Scope::Variant if frame.count >= 1 => return Err(Error::TooManyItems),
            Scope::Variant => {}
        }
        self.buf.push(tag as u8);
        Ok(())
    }

    fn close_item(&mut self) {
        self.frame().count += 1;
    }

    fn scalar(&mut self, tag: Tag, body: &[u8]) -> Result<()> {
        self.open_item(tag)?;
        self.buf.extend_from_slice(body);
        self.close_item();
        Ok(())
    }

    fn blob(&mut self, tag: Tag, body: &[u8]) -> Result<()> {
        let len = u32::try_from(body.len()).map_err(|_| Error::BlobTooLarge(body.len()))?;
        self.open_item(tag)?;
        self.buf.extend_from_slice(&len.to_le_bytes());
        self.buf.extend_from_slice(body);
        self.close_item();
        Ok(())
    }

    fn begin(&mut self, tag: Tag, scope: Scope) -> Result<()> {
        self.open_item(tag)?;
        self.buf.extend_from_slice(&[0; 4]);
        self.stack.push(Frame { start: self.buf.len(), scope, count: 0 });
        Ok(())
    }

    fn end(&mut self, expected: Scope) -> Result<()> {
        if self.stack.len() <= 1 {
            return Err(Error::ScopeUnderflow);
        }
        let frame = self.frame();
        if frame.scope != expected {
            return Err(Error::ScopeMismatch { expected, actual: frame.scope });
        }
        if frame.scope == Scope::Variant && frame.count == 0 {
            return Err(Error::EmptyVariant);
        }

        let start = frame.start;
        let body_len = self.buf.len() - start;
        let len = u32::try_from(body_len).map_err(|_| Error::BlobTooLarge(body_len))?;
        self.buf[start - 4..start].copy_from_slice(&len.to_le_bytes());
        self.stack.pop();
        self.close_item();
        Ok(())
    }

    pub fn bool(&mut self, v: bool) -> Result<()> {
        self.scalar(if v { Tag::BoolTrue } else { Tag::BoolFalse }, &[])
    }

    /// Encodes a u64 (LE).
    pub fn u64(&mut self, v: u64) -> Result<()> { self.scalar(Tag::U64, &v.to_le_bytes()) }

    pub fn unit(&mut self) -> Result<()> { self.scalar(Tag::Unit, &[]) }

    /// Encodes a fixed-width account address.
    pub fn address(&mut self, v: &[u8; ADDRESS_LEN]) -> Result<()> { self.scalar(Tag::Address, v) }

    /// Encodes a UTF-8 string blob.
    pub fn str(&mut self, v: &str) -> Result<()> { self.blob(Tag::String, v.as_bytes()) }

    /// Encodes a raw byte blob.
    pub fn bytes(&mut self, v: &[u8]) -> Result<()> { self.blob(Tag::Bytes, v) }

    /// Begins a List; close with `list_end()`.
    pub fn list_begin(&mut self) -> Result<()> { self.begin(Tag::List, Scope::List) }
    pub fn list_end(&mut self) -> Result<()> { self.end(Scope::List) }

    /// Begins a Map; only `variant_begin()` is allowed until `map_end()`.
    pub fn map_begin(&mut self) -> Result<()> { self.begin(Tag::Map, Scope::Map) }
    pub fn map_end(&mut self) -> Result<()> { self.end(Scope::Map) }

    /// Begins a named Variant. Exactly one payload item must follow before `variant_end()`.
    pub fn variant_begin(&mut self, name: &str) -> Result<()> {
        self.begin(Tag::Variant, Scope::Variant)?;
        self.str(name)?;
        // The name is metadata, not the payload.
        self.frame().count = 0;
        Ok(())
    }
    pub fn variant_end(&mut self) -> Result<()> { self.end(Scope::Variant) }
}

/// A zero-copy, bounds-checked view over a byte slice.
///
/// Reading advances the view. Container reads hand back a new `Decoder`
/// restricted to the container's body.
#[derive(Debug, Clone)]
pub struct Decoder<'a> {
    buf: &'a [u8],
}

impl<'a> Decoder<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf }
    }

    /// Returns the unread bytes in the view.
    pub fn remaining(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Peeks the next Tag without advancing.
    pub fn peek_tag(&self) -> Result<Tag> {
        let b = *self.buf.first().ok_or(Error::UnexpectedEnd)?;
        Tag::from_u8(b).ok_or(Error::InvalidTag(b))
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8]> {
        if n > self.buf.len() {
            return Err(Error::UnexpectedEnd);
        }
        let (head, tail) = self.buf.split_at(n);
        self.buf = tail;
        Ok(head)
    }

    fn take_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let bytes = self.take(N)?;
        bytes.try_into().map_err(|_| Error::UnexpectedEnd)
    }

    fn take_len(&mut self) -> Result<usize> {
        Ok(u32::from_le_bytes(self.take_array()?) as usize)
    }

    fn expect_tag(&mut self, expected: Tag) -> Result<()> {
        let tag = self.peek_tag()?;
        if tag != expected {
            return Err(Error::InvalidTag(tag as u8));
        }
        self.take(1)?;
        Ok(())
    }

    fn enter(&mut self, expected: Tag) -> Result<Decoder<'a>> {
        self.expect_tag(expected)?;
        let len = self.take_len()?;
        Ok(Decoder::new(self.take(len)?))
    }

    /// Skips the next item along with anything nested inside it.
    pub fn skip(&mut self) -> Result<()> {
        let tag = self.peek_tag()?;
        self.take(1)?;
        let len = match tag.fixed_width() {
            Some(width) => width,
            None => self.take_len()?,
        };
        self.take(len)?;
        Ok(())
    }

    pub fn bool(&mut self) -> Result<bool> {
        match self.peek_tag()? {
            Tag::BoolTrue => { self.take(1)?; Ok(true) }
            Tag::BoolFalse => { self.take(1)?; Ok(false) }
            tag => Err(Error::InvalidTag(tag as u8)),
        }
    }

    /// Decodes a u64 (LE).
    pub fn u64(&mut self) -> Result<u64> {
        self.expect_tag(Tag::U64)?;
        Ok(u64::from_le_bytes(self.take_array()?))
    }

    pub fn unit(&mut self) -> Result<()> { self.expect_tag(Tag::Unit) }

    pub fn address(&mut self) -> Result<[u8; ADDRESS_LEN]> {
        self.expect_tag(Tag::Address)?;
        self.take_array()
    }

    /// Decodes a string slice (UTF-8).
    pub fn str(&mut self) -> Result<&'a str> {
        self.expect_tag(Tag::String)?;
        let len = self.take_len()?;
        std::str::from_utf8(self.take(len)?).map_err(|_| Error::InvalidUtf8)
    }

    /// Decodes a byte slice.
    pub fn bytes(&mut self) -> Result<&'a [u8]> {
        self.expect_tag(Tag::Bytes)?;
        let len = self.take_len()?;
        self.take(len)
    }

    pub fn list(&mut self) -> Result<ListIter<'a>> {
        Ok(ListIter { dec: self.enter(Tag::List)? })
    }

    pub fn map(&mut self) -> Result<MapIter<'a>> {
        Ok(MapIter { dec: self.enter(Tag::Map)? })
    }

    /// Consumes the view, failing with `TooManyItems` if anything is left unread.
    pub fn finish(self) -> Result<()> {
        if !self.is_empty() {
            return Err(Error::TooManyItems);
        }
        Ok(())
    }

    /// Decodes a Variant, returning `(Name, PayloadDecoder)`.
    ///
    /// The payload decoder is not checked for extra items; call `finish` once it is read.
    pub fn variant(&mut self) -> Result<(&'a str, Decoder<'a>)> {
        let mut body = self.enter(Tag::Variant)?;
        let name = body.str()?;
        Ok((name, body))
    }
}

/// Items within a List, one bounded `Decoder` per item.
#[derive(Debug)]
pub struct ListIter<'a> {
    dec: Decoder<'a>,
}

impl<'a> ListIter<'a> {
    /// Returns a Decoder for the next item, or `None` at the end of the list.
    pub fn next(&mut self) -> Result<Option<Decoder<'a>>> {
        if self.dec.is_empty() {
            return Ok(None);
        }
        let mut probe = self.dec.clone();
        probe.skip()?;
        let len = self.dec.remaining() - probe.remaining();
        Ok(Some(Decoder::new(self.dec.take(len)?)))
    }
}

/// Key-Value pairs (Variants) within a Map.
#[derive(Debug)]
pub struct MapIter<'a> {
    dec: Decoder<'a>,
}

impl<'a> MapIter<'a> {
    /// Returns `(Key, ValueDecoder)` for the next entry, or `None`.
    pub fn next(&mut self) -> Result<Option<(&'a str, Decoder<'a>)>> {
        if self.dec.is_empty() {
            return Ok(None);
        }
        match self.dec.peek_tag()? {
            Tag::Variant => Ok(Some(self.dec.variant()?)),
            tag => Err(Error::InvalidTag(tag as u8)),
        }
    }
}
