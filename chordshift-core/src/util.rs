/// Iterator extension splitting mapped items into `Ok` and `Err` buckets.
pub trait PartitionResult : Iterator + Sized{
    fn partition_result<L, R, F>(self, mut f : F)->(Vec<L>,Vec<R>)
    where F : FnMut(Self::Item)->Result<L,R>
    {
        let mut ok = Vec::new();
        let mut failed = Vec::new();
        for item in self{
            match f(item){
                Ok(v) => ok.push(v),
                Err(e) => failed.push(e)
            }
        }
        (ok, failed)
    }
}

impl<I : Iterator> PartitionResult for I {}
