// automatically generated by the FlatBuffers compiler, do not modify


// @generated

use core::mem;
use core::cmp::Ordering;

extern crate flatbuffers;
use self::flatbuffers::{EndianScalar, Follow};

#[allow(unused_imports, dead_code)]
pub mod openmeteo {

  use core::mem;
  use core::cmp::Ordering;

  extern crate flatbuffers;
  use self::flatbuffers::{EndianScalar, Follow};

pub enum VariableWithValuesOffset {}
#[derive(Copy, Clone, PartialEq)]

pub struct VariableWithValues<'a> {
  pub _tab: flatbuffers::Table<'a>,
}

impl<'a> flatbuffers::Follow<'a> for VariableWithValues<'a> {
  type Inner = VariableWithValues<'a>;
  #[inline]
  unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
    Self { _tab: flatbuffers::Table::new(buf, loc) }
  }
}

impl<'a> VariableWithValues<'a> {
  pub const VT_VARIABLE: flatbuffers::VOffsetT = 4;
  pub const VT_UNIT: flatbuffers::VOffsetT = 6;
  pub const VT_VALUE: flatbuffers::VOffsetT = 8;
  pub const VT_VALUES: flatbuffers::VOffsetT = 10;
  pub const VT_VALUES_INT64: flatbuffers::VOffsetT = 12;
  pub const VT_ALTITUDE: flatbuffers::VOffsetT = 14;
  pub const VT_AGGREGATION: flatbuffers::VOffsetT = 16;
  pub const VT_PRESSURE_LEVEL: flatbuffers::VOffsetT = 18;
  pub const VT_DEPTH: flatbuffers::VOffsetT = 20;
  pub const VT_DEPTH_TO: flatbuffers::VOffsetT = 22;
  pub const VT_ENSEMBLE_MEMBER: flatbuffers::VOffsetT = 24;
  pub const VT_PREVIOUS_DAY: flatbuffers::VOffsetT = 26;

  #[inline]
  pub unsafe fn init_from_table(table: flatbuffers::Table<'a>) -> Self {
    VariableWithValues { _tab: table }
  }
  #[allow(unused_mut)]
  pub fn create<'bldr: 'args, 'args: 'mut_bldr, 'mut_bldr, A: flatbuffers::Allocator + 'bldr>(
    _fbb: &'mut_bldr mut flatbuffers::FlatBufferBuilder<'bldr, A>,
    args: &'args VariableWithValuesArgs<'args>
  ) -> flatbuffers::WIPOffset<VariableWithValues<'bldr>> {
    let mut builder = VariableWithValuesBuilder::new(_fbb);
    builder.add_value(args.value);
    if let Some(x) = args.values { builder.add_values(x); }
    if let Some(x) = args.values_int64 { builder.add_values_int64(x); }
    builder.add_previous_day(args.previous_day);
    builder.add_ensemble_member(args.ensemble_member);
    builder.add_depth_to(args.depth_to);
    builder.add_depth(args.depth);
    builder.add_pressure_level(args.pressure_level);
    builder.add_altitude(args.altitude);
    builder.add_aggregation(args.aggregation);
    builder.add_unit(args.unit);
    builder.add_variable(args.variable);
    builder.finish()
  }


  #[inline]
  pub fn variable(&self) -> u8 {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<u8>(VariableWithValues::VT_VARIABLE, Some(0)).unwrap()}
  }
  #[inline]
  pub fn unit(&self) -> u8 {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<u8>(VariableWithValues::VT_UNIT, Some(0)).unwrap()}
  }
  #[inline]
  pub fn value(&self) -> f32 {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<f32>(VariableWithValues::VT_VALUE, Some(0.0)).unwrap()}
  }
  #[inline]
  pub fn values(&self) -> Option<flatbuffers::Vector<'a, f32>> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<flatbuffers::Vector<'a, f32>>>(VariableWithValues::VT_VALUES, None)}
  }
  #[inline]
  pub fn values_int64(&self) -> Option<flatbuffers::Vector<'a, i64>> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<flatbuffers::Vector<'a, i64>>>(VariableWithValues::VT_VALUES_INT64, None)}
  }
  #[inline]
  pub fn altitude(&self) -> i16 {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<i16>(VariableWithValues::VT_ALTITUDE, Some(0)).unwrap()}
  }
  #[inline]
  pub fn aggregation(&self) -> u8 {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<u8>(VariableWithValues::VT_AGGREGATION, Some(0)).unwrap()}
  }
  #[inline]
  pub fn pressure_level(&self) -> i16 {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<i16>(VariableWithValues::VT_PRESSURE_LEVEL, Some(0)).unwrap()}
  }
  #[inline]
  pub fn depth(&self) -> i16 {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<i16>(VariableWithValues::VT_DEPTH, Some(0)).unwrap()}
  }
  #[inline]
  pub fn depth_to(&self) -> i16 {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<i16>(VariableWithValues::VT_DEPTH_TO, Some(0)).unwrap()}
  }
  #[inline]
  pub fn ensemble_member(&self) -> i16 {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<i16>(VariableWithValues::VT_ENSEMBLE_MEMBER, Some(0)).unwrap()}
  }
  #[inline]
  pub fn previous_day(&self) -> i16 {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<i16>(VariableWithValues::VT_PREVIOUS_DAY, Some(0)).unwrap()}
  }
}

impl flatbuffers::Verifiable for VariableWithValues<'_> {
  #[inline]
  fn run_verifier(
    v: &mut flatbuffers::Verifier, pos: usize
  ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
    use self::flatbuffers::Verifiable;
    v.visit_table(pos)?
     .visit_field::<u8>("variable", Self::VT_VARIABLE, false)?
     .visit_field::<u8>("unit", Self::VT_UNIT, false)?
     .visit_field::<f32>("value", Self::VT_VALUE, false)?
     .visit_field::<flatbuffers::ForwardsUOffset<flatbuffers::Vector<'_, f32>>>("values", Self::VT_VALUES, false)?
     .visit_field::<flatbuffers::ForwardsUOffset<flatbuffers::Vector<'_, i64>>>("values_int64", Self::VT_VALUES_INT64, false)?
     .visit_field::<i16>("altitude", Self::VT_ALTITUDE, false)?
     .visit_field::<u8>("aggregation", Self::VT_AGGREGATION, false)?
     .visit_field::<i16>("pressure_level", Self::VT_PRESSURE_LEVEL, false)?
     .visit_field::<i16>("depth", Self::VT_DEPTH, false)?
     .visit_field::<i16>("depth_to", Self::VT_DEPTH_TO, false)?
     .visit_field::<i16>("ensemble_member", Self::VT_ENSEMBLE_MEMBER, false)?
     .visit_field::<i16>("previous_day", Self::VT_PREVIOUS_DAY, false)?
     .finish();
    Ok(())
  }
}
pub struct VariableWithValuesArgs<'a> {
    pub variable: u8,
    pub unit: u8,
    pub value: f32,
    pub values: Option<flatbuffers::WIPOffset<flatbuffers::Vector<'a, f32>>>,
    pub values_int64: Option<flatbuffers::WIPOffset<flatbuffers::Vector<'a, i64>>>,
    pub altitude: i16,
    pub aggregation: u8,
    pub pressure_level: i16,
    pub depth: i16,
    pub depth_to: i16,
    pub ensemble_member: i16,
    pub previous_day: i16,
}
impl<'a> Default for VariableWithValuesArgs<'a> {
  #[inline]
  fn default() -> Self {
    VariableWithValuesArgs {
      variable: 0,
      unit: 0,
      value: 0.0,
      values: None,
      values_int64: None,
      altitude: 0,
      aggregation: 0,
      pressure_level: 0,
      depth: 0,
      depth_to: 0,
      ensemble_member: 0,
      previous_day: 0,
    }
  }
}

pub struct VariableWithValuesBuilder<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> {
  fbb_: &'b mut flatbuffers::FlatBufferBuilder<'a, A>,
  start_: flatbuffers::WIPOffset<flatbuffers::TableUnfinishedWIPOffset>,
}
impl<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> VariableWithValuesBuilder<'a, 'b, A> {
  #[inline]
  pub fn add_variable(&mut self, variable: u8) {
    self.fbb_.push_slot::<u8>(VariableWithValues::VT_VARIABLE, variable, 0);
  }
  #[inline]
  pub fn add_unit(&mut self, unit: u8) {
    self.fbb_.push_slot::<u8>(VariableWithValues::VT_UNIT, unit, 0);
  }
  #[inline]
  pub fn add_value(&mut self, value: f32) {
    self.fbb_.push_slot::<f32>(VariableWithValues::VT_VALUE, value, 0.0);
  }
  #[inline]
  pub fn add_values(&mut self, values: flatbuffers::WIPOffset<flatbuffers::Vector<'b, f32>>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<_>>(VariableWithValues::VT_VALUES, values);
  }
  #[inline]
  pub fn add_values_int64(&mut self, values_int64: flatbuffers::WIPOffset<flatbuffers::Vector<'b, i64>>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<_>>(VariableWithValues::VT_VALUES_INT64, values_int64);
  }
  #[inline]
  pub fn add_altitude(&mut self, altitude: i16) {
    self.fbb_.push_slot::<i16>(VariableWithValues::VT_ALTITUDE, altitude, 0);
  }
  #[inline]
  pub fn add_aggregation(&mut self, aggregation: u8) {
    self.fbb_.push_slot::<u8>(VariableWithValues::VT_AGGREGATION, aggregation, 0);
  }
  #[inline]
  pub fn add_pressure_level(&mut self, pressure_level: i16) {
    self.fbb_.push_slot::<i16>(VariableWithValues::VT_PRESSURE_LEVEL, pressure_level, 0);
  }
  #[inline]
  pub fn add_depth(&mut self, depth: i16) {
    self.fbb_.push_slot::<i16>(VariableWithValues::VT_DEPTH, depth, 0);
  }
  #[inline]
  pub fn add_depth_to(&mut self, depth_to: i16) {
    self.fbb_.push_slot::<i16>(VariableWithValues::VT_DEPTH_TO, depth_to, 0);
  }
  #[inline]
  pub fn add_ensemble_member(&mut self, ensemble_member: i16) {
    self.fbb_.push_slot::<i16>(VariableWithValues::VT_ENSEMBLE_MEMBER, ensemble_member, 0);
  }
  #[inline]
  pub fn add_previous_day(&mut self, previous_day: i16) {
    self.fbb_.push_slot::<i16>(VariableWithValues::VT_PREVIOUS_DAY, previous_day, 0);
  }
  #[inline]
  pub fn new(_fbb: &'b mut flatbuffers::FlatBufferBuilder<'a, A>) -> VariableWithValuesBuilder<'a, 'b, A> {
    let start = _fbb.start_table();
    VariableWithValuesBuilder {
      fbb_: _fbb,
      start_: start,
    }
  }
  #[inline]
  pub fn finish(self) -> flatbuffers::WIPOffset<VariableWithValues<'a>> {
    let o = self.fbb_.end_table(self.start_);
    flatbuffers::WIPOffset::new(o.value())
  }
}

impl core::fmt::Debug for VariableWithValues<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let mut ds = f.debug_struct("VariableWithValues");
      ds.field("variable", &self.variable());
      ds.field("unit", &self.unit());
      ds.field("value", &self.value());
      ds.field("values", &self.values());
      ds.field("values_int64", &self.values_int64());
      ds.field("altitude", &self.altitude());
      ds.field("aggregation", &self.aggregation());
      ds.field("pressure_level", &self.pressure_level());
      ds.field("depth", &self.depth());
      ds.field("depth_to", &self.depth_to());
      ds.field("ensemble_member", &self.ensemble_member());
      ds.field("previous_day", &self.previous_day());
      ds.finish()
  }
}
pub enum VariablesWithTimeOffset {}
#[derive(Copy, Clone, PartialEq)]

pub struct VariablesWithTime<'a> {
  pub _tab: flatbuffers::Table<'a>,
}

impl<'a> flatbuffers::Follow<'a> for VariablesWithTime<'a> {
  type Inner = VariablesWithTime<'a>;
  #[inline]
  unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
    Self { _tab: flatbuffers::Table::new(buf, loc) }
  }
}

impl<'a> VariablesWithTime<'a> {
  pub const VT_TIME: flatbuffers::VOffsetT = 4;
  pub const VT_TIME_END: flatbuffers::VOffsetT = 6;
  pub const VT_INTERVAL: flatbuffers::VOffsetT = 8;
  pub const VT_VARIABLES: flatbuffers::VOffsetT = 10;

  #[inline]
  pub unsafe fn init_from_table(table: flatbuffers::Table<'a>) -> Self {
    VariablesWithTime { _tab: table }
  }
  #[allow(unused_mut)]
  pub fn create<'bldr: 'args, 'args: 'mut_bldr, 'mut_bldr, A: flatbuffers::Allocator + 'bldr>(
    _fbb: &'mut_bldr mut flatbuffers::FlatBufferBuilder<'bldr, A>,
    args: &'args VariablesWithTimeArgs<'args>
  ) -> flatbuffers::WIPOffset<VariablesWithTime<'bldr>> {
    let mut builder = VariablesWithTimeBuilder::new(_fbb);
    builder.add_time_end(args.time_end);
    builder.add_time(args.time);
    if let Some(x) = args.variables { builder.add_variables(x); }
    builder.add_interval(args.interval);
    builder.finish()
  }


  #[inline]
  pub fn time(&self) -> i64 {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<i64>(VariablesWithTime::VT_TIME, Some(0)).unwrap()}
  }
  #[inline]
  pub fn time_end(&self) -> i64 {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<i64>(VariablesWithTime::VT_TIME_END, Some(0)).unwrap()}
  }
  #[inline]
  pub fn interval(&self) -> i32 {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<i32>(VariablesWithTime::VT_INTERVAL, Some(0)).unwrap()}
  }
  #[inline]
  pub fn variables(&self) -> Option<flatbuffers::Vector<'a, flatbuffers::ForwardsUOffset<VariableWithValues<'a>>>> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<flatbuffers::Vector<'a, flatbuffers::ForwardsUOffset<VariableWithValues>>>>(VariablesWithTime::VT_VARIABLES, None)}
  }
}

impl flatbuffers::Verifiable for VariablesWithTime<'_> {
  #[inline]
  fn run_verifier(
    v: &mut flatbuffers::Verifier, pos: usize
  ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
    use self::flatbuffers::Verifiable;
    v.visit_table(pos)?
     .visit_field::<i64>("time", Self::VT_TIME, false)?
     .visit_field::<i64>("time_end", Self::VT_TIME_END, false)?
     .visit_field::<i32>("interval", Self::VT_INTERVAL, false)?
     .visit_field::<flatbuffers::ForwardsUOffset<flatbuffers::Vector<'_, flatbuffers::ForwardsUOffset<VariableWithValues>>>>("variables", Self::VT_VARIABLES, false)?
     .finish();
    Ok(())
  }
}
pub struct VariablesWithTimeArgs<'a> {
    pub time: i64,
    pub time_end: i64,
    pub interval: i32,
    pub variables: Option<flatbuffers::WIPOffset<flatbuffers::Vector<'a, flatbuffers::ForwardsUOffset<VariableWithValues<'a>>>>>,
}
impl<'a> Default for VariablesWithTimeArgs<'a> {
  #[inline]
  fn default() -> Self {
    VariablesWithTimeArgs {
      time: 0,
      time_end: 0,
      interval: 0,
      variables: None,
    }
  }
}

pub struct VariablesWithTimeBuilder<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> {
  fbb_: &'b mut flatbuffers::FlatBufferBuilder<'a, A>,
  start_: flatbuffers::WIPOffset<flatbuffers::TableUnfinishedWIPOffset>,
}
impl<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> VariablesWithTimeBuilder<'a, 'b, A> {
  #[inline]
  pub fn add_time(&mut self, time: i64) {
    self.fbb_.push_slot::<i64>(VariablesWithTime::VT_TIME, time, 0);
  }
  #[inline]
  pub fn add_time_end(&mut self, time_end: i64) {
    self.fbb_.push_slot::<i64>(VariablesWithTime::VT_TIME_END, time_end, 0);
  }
  #[inline]
  pub fn add_interval(&mut self, interval: i32) {
    self.fbb_.push_slot::<i32>(VariablesWithTime::VT_INTERVAL, interval, 0);
  }
  #[inline]
  pub fn add_variables(&mut self, variables: flatbuffers::WIPOffset<flatbuffers::Vector<'b, flatbuffers::ForwardsUOffset<VariableWithValues<'b>>>>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<_>>(VariablesWithTime::VT_VARIABLES, variables);
  }
  #[inline]
  pub fn new(_fbb: &'b mut flatbuffers::FlatBufferBuilder<'a, A>) -> VariablesWithTimeBuilder<'a, 'b, A> {
    let start = _fbb.start_table();
    VariablesWithTimeBuilder {
      fbb_: _fbb,
      start_: start,
    }
  }
  #[inline]
  pub fn finish(self) -> flatbuffers::WIPOffset<VariablesWithTime<'a>> {
    let o = self.fbb_.end_table(self.start_);
    flatbuffers::WIPOffset::new(o.value())
  }
}

impl core::fmt::Debug for VariablesWithTime<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let mut ds = f.debug_struct("VariablesWithTime");
      ds.field("time", &self.time());
      ds.field("time_end", &self.time_end());
      ds.field("interval", &self.interval());
      ds.field("variables", &self.variables());
      ds.finish()
  }
}
pub enum WeatherApiResponseOffset {}
#[derive(Copy, Clone, PartialEq)]

pub struct WeatherApiResponse<'a> {
  pub _tab: flatbuffers::Table<'a>,
}

impl<'a> flatbuffers::Follow<'a> for WeatherApiResponse<'a> {
  type Inner = WeatherApiResponse<'a>;
  #[inline]
  unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
    Self { _tab: flatbuffers::Table::new(buf, loc) }
  }
}

impl<'a> WeatherApiResponse<'a> {
  pub const VT_LATITUDE: flatbuffers::VOffsetT = 4;
  pub const VT_LONGITUDE: flatbuffers::VOffsetT = 6;
  pub const VT_ELEVATION: flatbuffers::VOffsetT = 8;
  pub const VT_GENERATION_TIME_MILLISECONDS: flatbuffers::VOffsetT = 10;
  pub const VT_LOCATION_ID: flatbuffers::VOffsetT = 12;
  pub const VT_MODEL: flatbuffers::VOffsetT = 14;
  pub const VT_UTC_OFFSET_SECONDS: flatbuffers::VOffsetT = 16;
  pub const VT_TIMEZONE: flatbuffers::VOffsetT = 18;
  pub const VT_TIMEZONE_ABBREVIATION: flatbuffers::VOffsetT = 20;
  pub const VT_CURRENT: flatbuffers::VOffsetT = 22;
  pub const VT_DAILY: flatbuffers::VOffsetT = 24;
  pub const VT_HOURLY: flatbuffers::VOffsetT = 26;
  pub const VT_MINUTELY_15: flatbuffers::VOffsetT = 28;
  pub const VT_SIX_HOURLY: flatbuffers::VOffsetT = 30;

  #[inline]
  pub unsafe fn init_from_table(table: flatbuffers::Table<'a>) -> Self {
    WeatherApiResponse { _tab: table }
  }
  #[allow(unused_mut)]
  pub fn create<'bldr: 'args, 'args: 'mut_bldr, 'mut_bldr, A: flatbuffers::Allocator + 'bldr>(
    _fbb: &'mut_bldr mut flatbuffers::FlatBufferBuilder<'bldr, A>,
    args: &'args WeatherApiResponseArgs<'args>
  ) -> flatbuffers::WIPOffset<WeatherApiResponse<'bldr>> {
    let mut builder = WeatherApiResponseBuilder::new(_fbb);
    builder.add_location_id(args.location_id);
    if let Some(x) = args.six_hourly { builder.add_six_hourly(x); }
    if let Some(x) = args.minutely_15 { builder.add_minutely_15(x); }
    if let Some(x) = args.hourly { builder.add_hourly(x); }
    if let Some(x) = args.daily { builder.add_daily(x); }
    if let Some(x) = args.current { builder.add_current(x); }
    if let Some(x) = args.timezone_abbreviation { builder.add_timezone_abbreviation(x); }
    if let Some(x) = args.timezone { builder.add_timezone(x); }
    builder.add_utc_offset_seconds(args.utc_offset_seconds);
    builder.add_generation_time_milliseconds(args.generation_time_milliseconds);
    builder.add_elevation(args.elevation);
    builder.add_longitude(args.longitude);
    builder.add_latitude(args.latitude);
    builder.add_model(args.model);
    builder.finish()
  }


  #[inline]
  pub fn latitude(&self) -> f32 {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<f32>(WeatherApiResponse::VT_LATITUDE, Some(0.0)).unwrap()}
  }
  #[inline]
  pub fn longitude(&self) -> f32 {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<f32>(WeatherApiResponse::VT_LONGITUDE, Some(0.0)).unwrap()}
  }
  #[inline]
  pub fn elevation(&self) -> f32 {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<f32>(WeatherApiResponse::VT_ELEVATION, Some(0.0)).unwrap()}
  }
  #[inline]
  pub fn generation_time_milliseconds(&self) -> f32 {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<f32>(WeatherApiResponse::VT_GENERATION_TIME_MILLISECONDS, Some(0.0)).unwrap()}
  }
  #[inline]
  pub fn location_id(&self) -> i64 {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<i64>(WeatherApiResponse::VT_LOCATION_ID, Some(0)).unwrap()}
  }
  #[inline]
  pub fn model(&self) -> u8 {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<u8>(WeatherApiResponse::VT_MODEL, Some(0)).unwrap()}
  }
  #[inline]
  pub fn utc_offset_seconds(&self) -> i32 {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<i32>(WeatherApiResponse::VT_UTC_OFFSET_SECONDS, Some(0)).unwrap()}
  }
  #[inline]
  pub fn timezone(&self) -> Option<&'a str> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<&str>>(WeatherApiResponse::VT_TIMEZONE, None)}
  }
  #[inline]
  pub fn timezone_abbreviation(&self) -> Option<&'a str> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<&str>>(WeatherApiResponse::VT_TIMEZONE_ABBREVIATION, None)}
  }
  #[inline]
  pub fn current(&self) -> Option<VariablesWithTime<'a>> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<VariablesWithTime>>(WeatherApiResponse::VT_CURRENT, None)}
  }
  #[inline]
  pub fn daily(&self) -> Option<VariablesWithTime<'a>> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<VariablesWithTime>>(WeatherApiResponse::VT_DAILY, None)}
  }
  #[inline]
  pub fn hourly(&self) -> Option<VariablesWithTime<'a>> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<VariablesWithTime>>(WeatherApiResponse::VT_HOURLY, None)}
  }
  #[inline]
  pub fn minutely_15(&self) -> Option<VariablesWithTime<'a>> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<VariablesWithTime>>(WeatherApiResponse::VT_MINUTELY_15, None)}
  }
  #[inline]
  pub fn six_hourly(&self) -> Option<VariablesWithTime<'a>> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<VariablesWithTime>>(WeatherApiResponse::VT_SIX_HOURLY, None)}
  }
}

impl flatbuffers::Verifiable for WeatherApiResponse<'_> {
  #[inline]
  fn run_verifier(
    v: &mut flatbuffers::Verifier, pos: usize
  ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
    use self::flatbuffers::Verifiable;
    v.visit_table(pos)?
     .visit_field::<f32>("latitude", Self::VT_LATITUDE, false)?
     .visit_field::<f32>("longitude", Self::VT_LONGITUDE, false)?
     .visit_field::<f32>("elevation", Self::VT_ELEVATION, false)?
     .visit_field::<f32>("generation_time_milliseconds", Self::VT_GENERATION_TIME_MILLISECONDS, false)?
     .visit_field::<i64>("location_id", Self::VT_LOCATION_ID, false)?
     .visit_field::<u8>("model", Self::VT_MODEL, false)?
     .visit_field::<i32>("utc_offset_seconds", Self::VT_UTC_OFFSET_SECONDS, false)?
     .visit_field::<flatbuffers::ForwardsUOffset<&str>>("timezone", Self::VT_TIMEZONE, false)?
     .visit_field::<flatbuffers::ForwardsUOffset<&str>>("timezone_abbreviation", Self::VT_TIMEZONE_ABBREVIATION, false)?
     .visit_field::<flatbuffers::ForwardsUOffset<VariablesWithTime>>("current", Self::VT_CURRENT, false)?
     .visit_field::<flatbuffers::ForwardsUOffset<VariablesWithTime>>("daily", Self::VT_DAILY, false)?
     .visit_field::<flatbuffers::ForwardsUOffset<VariablesWithTime>>("hourly", Self::VT_HOURLY, false)?
     .visit_field::<flatbuffers::ForwardsUOffset<VariablesWithTime>>("minutely_15", Self::VT_MINUTELY_15, false)?
     .visit_field::<flatbuffers::ForwardsUOffset<VariablesWithTime>>("six_hourly", Self::VT_SIX_HOURLY, false)?
     .finish();
    Ok(())
  }
}
pub struct WeatherApiResponseArgs<'a> {
    pub latitude: f32,
    pub longitude: f32,
    pub elevation: f32,
    pub generation_time_milliseconds: f32,
    pub location_id: i64,
    pub model: u8,
    pub utc_offset_seconds: i32,
    pub timezone: Option<flatbuffers::WIPOffset<&'a str>>,
    pub timezone_abbreviation: Option<flatbuffers::WIPOffset<&'a str>>,
    pub current: Option<flatbuffers::WIPOffset<VariablesWithTime<'a>>>,
    pub daily: Option<flatbuffers::WIPOffset<VariablesWithTime<'a>>>,
    pub hourly: Option<flatbuffers::WIPOffset<VariablesWithTime<'a>>>,
    pub minutely_15: Option<flatbuffers::WIPOffset<VariablesWithTime<'a>>>,
    pub six_hourly: Option<flatbuffers::WIPOffset<VariablesWithTime<'a>>>,
}
impl<'a> Default for WeatherApiResponseArgs<'a> {
  #[inline]
  fn default() -> Self {
    WeatherApiResponseArgs {
      latitude: 0.0,
      longitude: 0.0,
      elevation: 0.0,
      generation_time_milliseconds: 0.0,
      location_id: 0,
      model: 0,
      utc_offset_seconds: 0,
      timezone: None,
      timezone_abbreviation: None,
      current: None,
      daily: None,
      hourly: None,
      minutely_15: None,
      six_hourly: None,
    }
  }
}

pub struct WeatherApiResponseBuilder<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> {
  fbb_: &'b mut flatbuffers::FlatBufferBuilder<'a, A>,
  start_: flatbuffers::WIPOffset<flatbuffers::TableUnfinishedWIPOffset>,
}
impl<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> WeatherApiResponseBuilder<'a, 'b, A> {
  #[inline]
  pub fn add_latitude(&mut self, latitude: f32) {
    self.fbb_.push_slot::<f32>(WeatherApiResponse::VT_LATITUDE, latitude, 0.0);
  }
  #[inline]
  pub fn add_longitude(&mut self, longitude: f32) {
    self.fbb_.push_slot::<f32>(WeatherApiResponse::VT_LONGITUDE, longitude, 0.0);
  }
  #[inline]
  pub fn add_elevation(&mut self, elevation: f32) {
    self.fbb_.push_slot::<f32>(WeatherApiResponse::VT_ELEVATION, elevation, 0.0);
  }
  #[inline]
  pub fn add_generation_time_milliseconds(&mut self, generation_time_milliseconds: f32) {
    self.fbb_.push_slot::<f32>(WeatherApiResponse::VT_GENERATION_TIME_MILLISECONDS, generation_time_milliseconds, 0.0);
  }
  #[inline]
  pub fn add_location_id(&mut self, location_id: i64) {
    self.fbb_.push_slot::<i64>(WeatherApiResponse::VT_LOCATION_ID, location_id, 0);
  }
  #[inline]
  pub fn add_model(&mut self, model: u8) {
    self.fbb_.push_slot::<u8>(WeatherApiResponse::VT_MODEL, model, 0);
  }
  #[inline]
  pub fn add_utc_offset_seconds(&mut self, utc_offset_seconds: i32) {
    self.fbb_.push_slot::<i32>(WeatherApiResponse::VT_UTC_OFFSET_SECONDS, utc_offset_seconds, 0);
  }
  #[inline]
  pub fn add_timezone(&mut self, timezone: flatbuffers::WIPOffset<&'b str>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<_>>(WeatherApiResponse::VT_TIMEZONE, timezone);
  }
  #[inline]
  pub fn add_timezone_abbreviation(&mut self, timezone_abbreviation: flatbuffers::WIPOffset<&'b str>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<_>>(WeatherApiResponse::VT_TIMEZONE_ABBREVIATION, timezone_abbreviation);
  }
  #[inline]
  pub fn add_current(&mut self, current: flatbuffers::WIPOffset<VariablesWithTime<'b>>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<VariablesWithTime>>(WeatherApiResponse::VT_CURRENT, current);
  }
  #[inline]
  pub fn add_daily(&mut self, daily: flatbuffers::WIPOffset<VariablesWithTime<'b>>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<VariablesWithTime>>(WeatherApiResponse::VT_DAILY, daily);
  }
  #[inline]
  pub fn add_hourly(&mut self, hourly: flatbuffers::WIPOffset<VariablesWithTime<'b>>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<VariablesWithTime>>(WeatherApiResponse::VT_HOURLY, hourly);
  }
  #[inline]
  pub fn add_minutely_15(&mut self, minutely_15: flatbuffers::WIPOffset<VariablesWithTime<'b>>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<VariablesWithTime>>(WeatherApiResponse::VT_MINUTELY_15, minutely_15);
  }
  #[inline]
  pub fn add_six_hourly(&mut self, six_hourly: flatbuffers::WIPOffset<VariablesWithTime<'b>>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<VariablesWithTime>>(WeatherApiResponse::VT_SIX_HOURLY, six_hourly);
  }
  #[inline]
  pub fn new(_fbb: &'b mut flatbuffers::FlatBufferBuilder<'a, A>) -> WeatherApiResponseBuilder<'a, 'b, A> {
    let start = _fbb.start_table();
    WeatherApiResponseBuilder {
      fbb_: _fbb,
      start_: start,
    }
  }
  #[inline]
  pub fn finish(self) -> flatbuffers::WIPOffset<WeatherApiResponse<'a>> {
    let o = self.fbb_.end_table(self.start_);
    flatbuffers::WIPOffset::new(o.value())
  }
}

impl core::fmt::Debug for WeatherApiResponse<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let mut ds = f.debug_struct("WeatherApiResponse");
      ds.field("latitude", &self.latitude());
      ds.field("longitude", &self.longitude());
      ds.field("elevation", &self.elevation());
      ds.field("generation_time_milliseconds", &self.generation_time_milliseconds());
      ds.field("location_id", &self.location_id());
      ds.field("model", &self.model());
      ds.field("utc_offset_seconds", &self.utc_offset_seconds());
      ds.field("timezone", &self.timezone());
      ds.field("timezone_abbreviation", &self.timezone_abbreviation());
      ds.field("current", &self.current());
      ds.field("daily", &self.daily());
      ds.field("hourly", &self.hourly());
      ds.field("minutely_15", &self.minutely_15());
      ds.field("six_hourly", &self.six_hourly());
      ds.finish()
  }
}
#[inline]
/// Verifies that a buffer of bytes contains a `WeatherApiResponse`
/// and returns it.
/// Note that verification is still experimental and may not
/// catch every error, or be maximally performant. For the
/// previous, unchecked, behavior use
/// `root_as_weather_api_response_unchecked`.
pub fn root_as_weather_api_response(buf: &[u8]) -> Result<WeatherApiResponse, flatbuffers::InvalidFlatbuffer> {
  flatbuffers::root::<WeatherApiResponse>(buf)
}
#[inline]
/// Verifies that a buffer of bytes contains a size prefixed
/// `WeatherApiResponse` and returns it.
/// Note that verification is still experimental and may not
/// catch every error, or be maximally performant. For the
/// previous, unchecked, behavior use
/// `size_prefixed_root_as_weather_api_response_unchecked`.
pub fn size_prefixed_root_as_weather_api_response(buf: &[u8]) -> Result<WeatherApiResponse, flatbuffers::InvalidFlatbuffer> {
  flatbuffers::size_prefixed_root::<WeatherApiResponse>(buf)
}
#[inline]
/// Verifies, with the given options, that a buffer of bytes
/// contains a `WeatherApiResponse` and returns it.
/// Note that verification is still experimental and may not
/// catch every error, or be maximally performant. For the
/// previous, unchecked, behavior use
/// `root_as_weather_api_response_unchecked`.
pub fn root_as_weather_api_response_with_opts<'b, 'o>(
  opts: &'o flatbuffers::VerifierOptions,
  buf: &'b [u8],
) -> Result<WeatherApiResponse<'b>, flatbuffers::InvalidFlatbuffer> {
  flatbuffers::root_with_opts::<WeatherApiResponse<'b>>(opts, buf)
}
#[inline]
/// Verifies, with the given verifier options, that a buffer of
/// bytes contains a size prefixed `WeatherApiResponse` and returns
/// it. Note that verification is still experimental and may not
/// catch every error, or be maximally performant. For the
/// previous, unchecked, behavior use
/// `root_as_weather_api_response_unchecked`.
pub fn size_prefixed_root_as_weather_api_response_with_opts<'b, 'o>(
  opts: &'o flatbuffers::VerifierOptions,
  buf: &'b [u8],
) -> Result<WeatherApiResponse<'b>, flatbuffers::InvalidFlatbuffer> {
  flatbuffers::size_prefixed_root_with_opts::<WeatherApiResponse<'b>>(opts, buf)
}
#[inline]
/// Assumes, without verification, that a buffer of bytes contains a WeatherApiResponse and returns it.
/// # Safety
/// Callers must trust the given bytes do indeed contain a valid `WeatherApiResponse`.
pub unsafe fn root_as_weather_api_response_unchecked(buf: &[u8]) -> WeatherApiResponse {
  unsafe { flatbuffers::root_unchecked::<WeatherApiResponse>(buf) }
}
#[inline]
/// Assumes, without verification, that a buffer of bytes contains a size prefixed WeatherApiResponse and returns it.
/// # Safety
/// Callers must trust the given bytes do indeed contain a valid size prefixed `WeatherApiResponse`.
pub unsafe fn size_prefixed_root_as_weather_api_response_unchecked(buf: &[u8]) -> WeatherApiResponse {
  unsafe { flatbuffers::size_prefixed_root_unchecked::<WeatherApiResponse>(buf) }
}
#[inline]
pub fn finish_weather_api_response_buffer<'a, 'b, A: flatbuffers::Allocator + 'a>(
    fbb: &'b mut flatbuffers::FlatBufferBuilder<'a, A>,
    root: flatbuffers::WIPOffset<WeatherApiResponse<'a>>) {
  fbb.finish(root, None);
}

#[inline]
pub fn finish_size_prefixed_weather_api_response_buffer<'a, 'b, A: flatbuffers::Allocator + 'a>(fbb: &'b mut flatbuffers::FlatBufferBuilder<'a, A>, root: flatbuffers::WIPOffset<WeatherApiResponse<'a>>) {
  fbb.finish_size_prefixed(root, None);
}
}  // pub mod openmeteo
